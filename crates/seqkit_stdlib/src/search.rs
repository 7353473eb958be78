//! Quantifiers, membership tests, and lookups.
//!
//! Lookups return `Option` rather than a `-1` or default sentinel, so a
//! legitimately stored `-1` can never be mistaken for "not found".

use seqkit_foundation::{SameValue, Sequence, StrictEquality};

use crate::index::resolve_existing;

/// Returns true if any element satisfies `predicate`; stops at the first hit.
///
/// Always false for an empty sequence.
pub fn some<T, F>(sequence: &Sequence<T>, predicate: F) -> bool
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    sequence.iter().any(predicate)
}

/// Returns true if every element satisfies `predicate`; stops at the first miss.
///
/// Always true for an empty sequence.
pub fn every<T, F>(sequence: &Sequence<T>, predicate: F) -> bool
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    sequence.iter().all(predicate)
}

/// Membership under same-value equality, so `NaN` is found.
pub fn includes<T>(sequence: &Sequence<T>, value: &T) -> bool
where
    T: Clone + SameValue,
{
    sequence.iter().any(|item| item.same_value(value))
}

/// Position of the first element strictly equal to `value`.
///
/// Strict equality never matches `NaN`.
pub fn index_of<T>(sequence: &Sequence<T>, value: &T) -> Option<usize>
where
    T: Clone + StrictEquality,
{
    sequence.iter().position(|item| item.strict_eq(value))
}

/// Position of the last element strictly equal to `value`.
pub fn last_index_of<T>(sequence: &Sequence<T>, value: &T) -> Option<usize>
where
    T: Clone + StrictEquality,
{
    sequence.iter().rposition(|item| item.strict_eq(value))
}

/// First element satisfying `predicate`.
pub fn find<T, F>(sequence: &Sequence<T>, mut predicate: F) -> Option<&T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    sequence.iter().find(|item| predicate(item))
}

/// Position of the first element satisfying `predicate`.
pub fn find_index<T, F>(sequence: &Sequence<T>, predicate: F) -> Option<usize>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    sequence.iter().position(predicate)
}

/// Last element satisfying `predicate`.
pub fn find_last<T, F>(sequence: &Sequence<T>, mut predicate: F) -> Option<&T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    sequence.iter().rev().find(|item| predicate(item))
}

/// Position of the last element satisfying `predicate`.
pub fn find_last_index<T, F>(sequence: &Sequence<T>, predicate: F) -> Option<usize>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    sequence.iter().rposition(predicate)
}

/// Element at a relative index (negative counts from the end).
pub fn at<T: Clone>(sequence: &Sequence<T>, index: i64) -> Option<&T> {
    resolve_existing(index, sequence.len()).and_then(|i| sequence.get(i))
}
