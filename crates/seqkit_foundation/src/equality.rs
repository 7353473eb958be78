//! Element equality under two notions: strict and same-value.
//!
//! | | NaN vs NaN | +0 vs -0 | composites |
//! |---|---|---|---|
//! | [`StrictEquality`] | unequal | equal | by reference |
//! | [`SameValue`] | equal | equal | by reference |
//!
//! Rust's own `PartialEq` is a third notion (structural) and is not used by
//! the collection utilities for membership tests.

use std::hash::{Hash, Hasher};

/// Strict equality: IEEE comparison for floats, identity for composites.
///
/// Used by position lookups (`index_of`, `last_index_of`), which therefore
/// never find `NaN`.
pub trait StrictEquality {
    /// Returns true if `self` and `other` are strictly equal.
    fn strict_eq(&self, other: &Self) -> bool;
}

/// Same-value equality: strict equality, except `NaN` equals itself.
///
/// Used by membership and deduplication (`includes`, `distinct`).
/// Implementations must keep `same_value_hash` consistent with `same_value`:
/// values that compare same-value equal feed identical bytes to the hasher.
pub trait SameValue {
    /// Returns true if `self` and `other` are the same value.
    fn same_value(&self, other: &Self) -> bool;

    /// Feeds a hash consistent with [`SameValue::same_value`] into `state`.
    fn same_value_hash<H: Hasher>(&self, state: &mut H);
}

/// Wraps a reference so that `Eq` and `Hash` follow [`SameValue`].
///
/// Lets same-value elements be used as keys in hashed collections.
#[derive(Debug)]
pub struct SameValueKey<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Clone for SameValueKey<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for SameValueKey<'_, T> {}

impl<T: SameValue + ?Sized> PartialEq for SameValueKey<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_value(other.0)
    }
}

impl<T: SameValue + ?Sized> Eq for SameValueKey<'_, T> {}

impl<T: SameValue + ?Sized> Hash for SameValueKey<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.same_value_hash(state);
    }
}

/// Canonical bit pattern for a float under same-value equality.
///
/// Collapses every NaN payload to one pattern and `-0.0` onto `0.0`.
#[must_use]
pub fn canonical_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}

macro_rules! impl_exact_equality {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StrictEquality for $ty {
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl SameValue for $ty {
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }

                fn same_value_hash<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }
            }
        )*
    };
}

impl_exact_equality!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

impl StrictEquality for f64 {
    #[allow(clippy::float_cmp)]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl SameValue for f64 {
    #[allow(clippy::float_cmp)]
    fn same_value(&self, other: &Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }

    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(*self).hash(state);
    }
}

impl StrictEquality for f32 {
    #[allow(clippy::float_cmp)]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl SameValue for f32 {
    fn same_value(&self, other: &Self) -> bool {
        f64::from(*self).same_value(&f64::from(*other))
    }

    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(f64::from(*self)).hash(state);
    }
}

impl<T: StrictEquality + ?Sized> StrictEquality for &T {
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }
}

impl<T: SameValue + ?Sized> SameValue for &T {
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }

    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        (**self).same_value_hash(state);
    }
}

// `None` plays the role of the absent value: equal only to itself.
impl<T: StrictEquality> StrictEquality for Option<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.strict_eq(b),
            _ => false,
        }
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.same_value(b),
            _ => false,
        }
    }

    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            None => 0u8.hash(state),
            Some(inner) => {
                1u8.hash(state);
                inner.same_value_hash(state);
            }
        }
    }
}
