//! Stable sorting, in place or on a copy.

use std::cmp::Ordering;

use seqkit_foundation::{Sequence, TextForm};
use tracing::trace;

/// Sorts in place with a three-way comparator.
///
/// The sort is stable: elements comparing equal keep their input order.
pub fn sort_in_place<T, F>(sequence: &mut Sequence<T>, compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sequence.sort_stable_by(compare);
    trace!(len = sequence.len(), "sort_in_place");
}

/// Returns a sorted copy, leaving `sequence` untouched.
pub fn sorted_copy<T, F>(sequence: &Sequence<T>, compare: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut copy = sequence.clone();
    copy.sort_stable_by(compare);
    copy
}

/// Adapts a comparator returning negative, zero, or positive numbers.
///
/// `NaN` results count as zero.
///
/// ```
/// use seqkit_stdlib::{Sequence, sign_comparator, sorted_copy};
///
/// let prices: Sequence<f64> = vec![3.5, 1.25, 2.0].into();
/// let ascending = sorted_copy(&prices, sign_comparator(|a: &f64, b: &f64| a - b));
/// assert_eq!(ascending.to_vec(), vec![1.25, 2.0, 3.5]);
/// ```
pub fn sign_comparator<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> f64,
{
    move |a: &T, b: &T| {
        let sign = compare(a, b);
        if sign < 0.0 {
            Ordering::Less
        } else if sign > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Orders elements by their text forms, compared as UTF-16 code units.
///
/// This is the ordering used when no comparator is supplied, which is why
/// `[1, 10, 2]` sorts as `[1, 10, 2]`.
pub fn compare_as_text<T: TextForm>(a: &T, b: &T) -> Ordering {
    let a = a.to_text();
    let b = b.to_text();
    a.encode_utf16().cmp(b.encode_utf16())
}
