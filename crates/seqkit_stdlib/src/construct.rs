//! Building sequences of a requested length.

use seqkit_foundation::{Limits, Result, Sequence};

/// Builds a sequence of `length` copies of `value`.
///
/// ```
/// use seqkit_stdlib::construct;
///
/// let fruit = construct(3, "fruit").unwrap();
/// assert_eq!(fruit.to_vec(), vec!["fruit", "fruit", "fruit"]);
/// ```
///
/// # Errors
///
/// Fails with an invalid-argument error if `length` is negative or exceeds
/// the default [`Limits`].
pub fn construct<T: Clone>(length: i64, value: T) -> Result<Sequence<T>> {
    construct_within(&Limits::default(), length, move |_| value.clone())
}

/// Builds a sequence of `length` slots, invoking `factory` once per slot in order.
///
/// # Errors
///
/// Same as [`construct`].
pub fn construct_with<T, F>(length: i64, mut factory: F) -> Result<Sequence<T>>
where
    T: Clone,
    F: FnMut() -> T,
{
    construct_within(&Limits::default(), length, |_| factory())
}

/// Builds a sequence whose slot `i` holds `init(i)`.
///
/// # Errors
///
/// Same as [`construct`].
pub fn construct_indexed<T, F>(length: i64, init: F) -> Result<Sequence<T>>
where
    T: Clone,
    F: FnMut(usize) -> T,
{
    construct_within(&Limits::default(), length, init)
}

/// Builds an indexed sequence, validating `length` against explicit limits.
///
/// # Errors
///
/// Fails with an invalid-argument error if `length` is negative or exceeds
/// `limits.max_length`.
pub fn construct_within<T, F>(limits: &Limits, length: i64, init: F) -> Result<Sequence<T>>
where
    T: Clone,
    F: FnMut(usize) -> T,
{
    let len = limits
        .check_length(length)
        .map_err(|e| e.in_operation("construct"))?;
    Ok((0..len).map(init).collect())
}
