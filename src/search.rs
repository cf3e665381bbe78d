use std::ops::{Bound, RangeBounds};

use crate::ListError;

/// Smallest index at which `key` can be inserted while keeping `entries`
/// sorted by the projected key. Ties land before every equal key.
pub(crate) fn insertion_point_left<T, K: Ord>(
    entries: &[T],
    key: &K,
    project: impl Fn(&T) -> &K,
) -> usize {
    entries.partition_point(|entry| project(entry) < key)
}

/// Smallest index after every entry whose projected key equals `key`.
pub(crate) fn insertion_point_right<T, K: Ord>(
    entries: &[T],
    key: &K,
    project: impl Fn(&T) -> &K,
) -> usize {
    entries.partition_point(|entry| project(entry) <= key)
}

/// Turn a `RangeBounds` search window into a concrete `(start, end)` pair.
///
/// The end clamps to `len`; a start past the clamped end is an error.
pub(crate) fn resolve_range(
    range: impl RangeBounds<usize>,
    len: usize,
) -> Result<(usize, usize), ListError> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    let end = end.min(len);

    if start > end {
        return Err(ListError::InvalidRange { start, end });
    }

    Ok((start, end))
}
