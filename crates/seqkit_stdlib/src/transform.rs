//! Pure transformations: new sequences or folded values, input untouched.

use seqkit_foundation::{Error, Result, SameValue, SameValueKey, Sequence, Truthiness};
use tracing::debug;

use crate::index::{clamp_relative, resolve_existing};
use crate::mutate::splice_at;

// =============================================================================
// Mapping and Filtering
// =============================================================================

/// Maps each element (with its index) through `transform`.
///
/// The output has the same length as the input.
pub fn map<T, U, F>(sequence: &Sequence<T>, mut transform: F) -> Sequence<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(&T, usize) -> U,
{
    sequence
        .iter()
        .enumerate()
        .map(|(i, item)| transform(item, i))
        .collect()
}

/// Keeps, in order, the elements for which `predicate` holds.
pub fn filter<T, F>(sequence: &Sequence<T>, mut predicate: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    sequence.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Keeps only truthy elements.
///
/// Drops `false`, zeros, `NaN`, empty strings, and absent values.
pub fn truthy<T>(sequence: &Sequence<T>) -> Sequence<T>
where
    T: Clone + Truthiness,
{
    filter(sequence, Truthiness::is_truthy)
}

/// Keeps the first occurrence of each value under same-value equality.
///
/// ```
/// use seqkit_stdlib::{Sequence, Value, distinct};
///
/// let tags: Sequence<Value> = vec![
///     Value::from("a"), Value::from(1), Value::from("a"), Value::from(2),
/// ].into();
/// assert_eq!(distinct(&tags).to_vec(), vec![Value::from("a"), Value::from(1), Value::from(2)]);
/// ```
pub fn distinct<T>(sequence: &Sequence<T>) -> Sequence<T>
where
    T: Clone + SameValue,
{
    let mut seen = im::HashSet::new();
    let mut result = Sequence::new();
    for item in sequence {
        if seen.insert(SameValueKey(item)).is_none() {
            result.push_back(item.clone());
        }
    }
    result
}

// =============================================================================
// Reduction
// =============================================================================

/// Folds left-to-right from `initial`.
///
/// Returns `initial` unchanged for an empty sequence.
pub fn reduce<T, A, F>(sequence: &Sequence<T>, combine: F, initial: A) -> A
where
    T: Clone,
    F: FnMut(A, &T) -> A,
{
    sequence.iter().fold(initial, combine)
}

/// Folds left-to-right, seeding with the first element.
///
/// # Errors
///
/// Fails with an empty-reduction error if the sequence is empty.
pub fn reduce_unseeded<T, F>(sequence: &Sequence<T>, combine: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let mut items = sequence.iter();
    let Some(first) = items.next() else {
        debug!("reduce of empty sequence without initial value");
        return Err(Error::empty_reduction().in_operation("reduce"));
    };
    Ok(items.fold(first.clone(), combine))
}

/// Folds right-to-left from `initial`.
pub fn reduce_right<T, A, F>(sequence: &Sequence<T>, combine: F, initial: A) -> A
where
    T: Clone,
    F: FnMut(A, &T) -> A,
{
    sequence.iter().rev().fold(initial, combine)
}

/// Folds right-to-left, seeding with the last element.
///
/// # Errors
///
/// Fails with an empty-reduction error if the sequence is empty.
pub fn reduce_right_unseeded<T, F>(sequence: &Sequence<T>, combine: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let mut items = sequence.iter().rev();
    let Some(last) = items.next() else {
        debug!("reduce_right of empty sequence without initial value");
        return Err(Error::empty_reduction().in_operation("reduce_right"));
    };
    Ok(items.fold(last.clone(), combine))
}

// =============================================================================
// Copying Variants
// =============================================================================

/// Copies the elements at positions `[start, end)`.
///
/// Negative positions count from the end; both bounds are clamped. `None`
/// for `end` means "through the end". An empty range yields an empty sequence.
pub fn slice<T: Clone>(sequence: &Sequence<T>, start: i64, end: Option<i64>) -> Sequence<T> {
    let len = sequence.len();
    let from = clamp_relative(start, len);
    let to = end.map_or(len, |e| clamp_relative(e, len));
    if from >= to {
        return Sequence::new();
    }
    sequence.clone().drain(from..to)
}

/// Returns a copy of `sequence` with [`splice_at`] applied to the copy.
pub fn spliced<T, I>(
    sequence: &Sequence<T>,
    start: i64,
    delete_count: Option<usize>,
    items: I,
) -> Sequence<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let mut copy = sequence.clone();
    splice_at(&mut copy, start, delete_count, items);
    copy
}

/// Returns a copy with the element at `index` replaced by `value`.
///
/// Negative indices count from the end. Unlike slicing, the index is not
/// clamped: it must address an existing element.
///
/// # Errors
///
/// Fails with an invalid-argument error if `index` is out of bounds.
pub fn with_element<T: Clone>(sequence: &Sequence<T>, index: i64, value: T) -> Result<Sequence<T>> {
    let Some(position) = resolve_existing(index, sequence.len()) else {
        debug!(index, len = sequence.len(), "rejected out-of-bounds index");
        return Err(Error::index_out_of_bounds(index, sequence.len()).in_operation("with_element"));
    };
    let mut copy = sequence.clone();
    copy.set(position, value);
    Ok(copy)
}

/// Returns a reversed copy.
pub fn reversed<T: Clone>(sequence: &Sequence<T>) -> Sequence<T> {
    sequence.iter().rev().cloned().collect()
}

/// Returns the elements of `first` followed by those of `second`.
pub fn concat<T: Clone>(first: &Sequence<T>, second: &Sequence<T>) -> Sequence<T> {
    let mut result = first.clone();
    result.append(second.clone());
    result
}
