//! Dynamic element type for heterogeneous sequences.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coerce::{TextForm, Truthiness, format_number};
use crate::equality::{SameValue, StrictEquality, canonical_bits};
use crate::record::Record;
use crate::sequence::Sequence;

/// Dynamic value, for sequences such as `["a", 1, 2, "a"]` that mix types.
///
/// Primitives compare by content. `Seq` and `Record` are shared references:
/// cloning a `Value::Record` yields the *same* record, while two records
/// built separately are different even with identical fields. The
/// [`StrictEquality`] and [`SameValue`] impls follow those semantics.
///
/// Rust's `PartialEq`/`Eq`/`Hash` are structural instead (composites compare
/// by content, `NaN == NaN`, `0.0 == -0.0`), which is what assertions want.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A missing value (an unset slot, a missing field).
    Undefined,
    /// An intentionally empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit floating point; the only numeric type.
    Number(f64),
    /// Text value.
    String(Arc<str>),
    /// Shared reference to a sequence of values.
    Seq(Arc<Sequence<Value>>),
    /// Shared reference to a record.
    Record(Arc<Record>),
}

impl Value {
    /// Returns the type name as the `typeof` operator would report it.
    ///
    /// `Null`, sequences and records all report `"object"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Null | Self::Seq(_) | Self::Record(_) => "object",
        }
    }

    /// Returns true for `Undefined` and `Null`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns true for the primitive variants (everything except `Seq` and `Record`).
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Self::Seq(_) | Self::Record(_))
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a sequence reference.
    #[must_use]
    pub fn as_seq(&self) -> Option<&Sequence<Value>> {
        match self {
            Self::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a record reference.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Looks up a field if this value is a record.
    ///
    /// Returns `None` for non-records and for missing fields alike.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_record().and_then(|r| r.get(name))
    }

    /// Returns true if both values are composites sharing one allocation.
    #[must_use]
    pub fn same_reference(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Seq(a), Self::Seq(b)) => Arc::ptr_eq(a, b),
            (Self::Record(a), Self::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Orders numbers numerically and strings lexically; other pairs are unordered.
    ///
    /// Handy as the basis for comparators over homogeneous value sequences.
    #[must_use]
    pub fn partial_compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::String(a), Self::String(b)) => a.partial_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl StrictEquality for Value {
    #[allow(clippy::float_cmp)]
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => self.same_reference(other),
        }
    }
}

impl SameValue for Value {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.same_value(b),
            _ => self.strict_eq(other),
        }
    }

    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => canonical_bits(*n).hash(state),
            Self::String(s) => s.hash(state),
            Self::Seq(s) => std::ptr::hash(Arc::as_ptr(s), state),
            Self::Record(r) => std::ptr::hash(Arc::as_ptr(r), state),
        }
    }
}

impl Truthiness for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.is_truthy(),
            Self::String(s) => !s.is_empty(),
            Self::Seq(_) | Self::Record(_) => true,
        }
    }
}

impl TextForm for Value {
    fn to_text(&self) -> String {
        match self {
            Self::Undefined | Self::Null => String::new(),
            Self::Seq(items) => {
                let parts: Vec<String> = items.iter().map(TextForm::to_text).collect();
                parts.join(",")
            }
            other => other.to_string(),
        }
    }
}

// Structural equality, consistent with Hash below.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => canonical_bits(*n).hash(state),
            Self::String(s) => s.hash(state),
            Self::Seq(s) => s.hash(state),
            Self::Record(r) => r.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Seq(s) => write!(f, "{s:?}"),
            Self::Record(r) => write!(f, "{r:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Seq(_) => write!(f, "{}", self.to_text()),
            Self::Record(_) => write!(f, "[object Object]"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    /// Converts through `f64`; magnitudes above 2⁵³ lose precision.
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        r.into_value()
    }
}

impl From<Sequence<Value>> for Value {
    fn from(s: Sequence<Value>) -> Self {
        Self::Seq(Arc::new(s))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::from(v.into_iter().map(Into::into).collect::<Sequence<Value>>())
    }
}
