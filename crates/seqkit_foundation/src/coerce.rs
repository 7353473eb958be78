//! Truthiness and text coercion of elements.

/// Boolean coercion of an element.
///
/// Falsy: `false`, zero (either sign), `NaN`, the empty string, and absent
/// values (`None`, [`Value::Undefined`](crate::Value::Undefined),
/// [`Value::Null`](crate::Value::Null)). Everything else is truthy.
pub trait Truthiness {
    /// Returns true if the element counts as true in a boolean context.
    fn is_truthy(&self) -> bool;
}

/// Text used for an element when a sequence is joined into a string.
pub trait TextForm {
    /// Returns the element's text form.
    fn to_text(&self) -> String;
}

/// Formats a number the way it reads in source text.
///
/// Integral values have no fractional part, `-0` prints as `0`, and the
/// non-finite values print as `NaN`, `Infinity`, `-Infinity`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl Truthiness for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthiness for f64 {
    fn is_truthy(&self) -> bool {
        !(self.is_nan() || *self == 0.0)
    }
}

impl Truthiness for f32 {
    fn is_truthy(&self) -> bool {
        f64::from(*self).is_truthy()
    }
}

impl Truthiness for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthiness> Truthiness for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthiness::is_truthy)
    }
}

impl<T: Truthiness + ?Sized> Truthiness for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl TextForm for f64 {
    fn to_text(&self) -> String {
        format_number(*self)
    }
}

impl TextForm for f32 {
    fn to_text(&self) -> String {
        format_number(f64::from(*self))
    }
}

impl TextForm for str {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<T: TextForm> TextForm for Option<T> {
    fn to_text(&self) -> String {
        self.as_ref().map(TextForm::to_text).unwrap_or_default()
    }
}

impl<T: TextForm + ?Sized> TextForm for &T {
    fn to_text(&self) -> String {
        (**self).to_text()
    }
}

macro_rules! impl_integer_coercion {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthiness for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }

            impl TextForm for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_coercion!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_display_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextForm for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_display_text!(bool, char, String);
