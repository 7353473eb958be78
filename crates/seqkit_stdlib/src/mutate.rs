//! In-place operations.
//!
//! Each function takes `&mut Sequence<T>` and returns an auxiliary result
//! (a removed element, the removed elements, or the new length). The
//! copy-returning counterparts live in [`crate::transform`] and [`crate::sort`].

use seqkit_foundation::Sequence;
use tracing::trace;

use crate::index::clamp_relative;

/// Removes and returns the last element, or `None` if empty.
pub fn remove_last<T: Clone>(sequence: &mut Sequence<T>) -> Option<T> {
    let removed = sequence.pop_back();
    trace!(len = sequence.len(), removed = removed.is_some(), "remove_last");
    removed
}

/// Appends `items` in order; returns the new length.
pub fn append_many<T, I>(sequence: &mut Sequence<T>, items: I) -> usize
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    sequence.extend(items);
    trace!(len = sequence.len(), "append_many");
    sequence.len()
}

/// Removes and returns the first element, or `None` if empty.
///
/// Every remaining element moves one position toward the start.
pub fn remove_first<T: Clone>(sequence: &mut Sequence<T>) -> Option<T> {
    let removed = sequence.pop_front();
    trace!(len = sequence.len(), removed = removed.is_some(), "remove_first");
    removed
}

/// Inserts `item` at position 0; returns the new length.
pub fn prepend_one<T: Clone>(sequence: &mut Sequence<T>, item: T) -> usize {
    sequence.push_front(item);
    trace!(len = sequence.len(), "prepend_one");
    sequence.len()
}

/// Removes and inserts elements at `start`; returns the removed elements.
///
/// `start` is relative (negative counts from the end) and clamped to
/// `[0, len]`. `delete_count` is clamped to the elements available after
/// `start`; `None` removes everything from `start` on. `items` are inserted
/// at `start` in order.
///
/// This is the general primitive behind [`remove_last`], [`append_many`],
/// [`remove_first`], and [`prepend_one`].
///
/// ```
/// use seqkit_stdlib::{Sequence, splice_at};
///
/// let mut colors: Sequence<&str> = vec!["green", "yellow", "blue", "purple"].into();
/// let removed = splice_at(&mut colors, 2, Some(2), ["pink", "orange"]);
/// assert_eq!(removed.to_vec(), vec!["blue", "purple"]);
/// assert_eq!(colors.to_vec(), vec!["green", "yellow", "pink", "orange"]);
/// ```
pub fn splice_at<T, I>(
    sequence: &mut Sequence<T>,
    start: i64,
    delete_count: Option<usize>,
    items: I,
) -> Sequence<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let len = sequence.len();
    let from = clamp_relative(start, len);
    let available = len - from;
    let count = delete_count.map_or(available, |n| n.min(available));

    let removed = sequence.drain(from..from + count);
    let before = sequence.len();
    sequence.insert_all(from, items);
    trace!(
        start = from,
        removed = removed.len(),
        inserted = sequence.len() - before,
        len = sequence.len(),
        "splice_at"
    );
    removed
}

/// Reverses element order in place.
pub fn reverse_in_place<T: Clone>(sequence: &mut Sequence<T>) {
    sequence.reverse();
    trace!(len = sequence.len(), "reverse_in_place");
}
