//! Relative index resolution shared by slice, splice, and `at`.

/// Resolves a relative position against `len`, clamped to `[0, len]`.
///
/// Negative positions count back from the end.
pub(crate) fn clamp_relative(position: i64, len: usize) -> usize {
    if position < 0 {
        let back = usize::try_from(position.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(back)
    } else {
        usize::try_from(position).map_or(len, |p| p.min(len))
    }
}

/// Resolves a relative index to an existing element position, if any.
pub(crate) fn resolve_existing(index: i64, len: usize) -> Option<usize> {
    let position = if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)?
    } else {
        usize::try_from(index).ok()?
    };
    (position < len).then_some(position)
}
