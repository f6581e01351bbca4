//! # Greedy Balanced-Remainder Partitioning

use crate::{
    errors::{WTResult, WordtallyError},
    partition::SegmentRange,
};

/// Split `token_count` tokens into `segments` contiguous ranges.
///
/// Each step takes `ceil(remaining / segments_left)` tokens, so segment sizes
/// differ by at most one, never increase in spawn order, and any remainder
/// lands on the earliest segments.
///
/// Always returns exactly `segments` ranges covering `[0, token_count)`.
/// When `segments > token_count` the trailing ranges are empty and
/// positioned at `token_count`.
///
/// ## Arguments
/// * `token_count` - the number of tokens to split, `N`.
/// * `segments` - the number of segments, `K`.
///
/// ## Errors
/// [`WordtallyError::InvalidArgument`] if `segments == 0`.
///
/// ## Example
/// ```rust
/// use wordtally::{SegmentRange, partition};
///
/// let ranges = partition(5, 2).unwrap();
/// assert_eq!(ranges, vec![SegmentRange::new(0, 3), SegmentRange::new(3, 5)]);
/// ```
pub fn partition(
    token_count: usize,
    segments: usize,
) -> WTResult<Vec<SegmentRange>> {
    if segments == 0 {
        return Err(WordtallyError::invalid_argument(
            "segments",
            format!("must be >= 1, got {segments}"),
        ));
    }

    let mut ranges = Vec::with_capacity(segments);
    let mut start = 0;
    let mut remaining = token_count;

    for segments_left in (1..=segments).rev() {
        // ceil(r / s) <= r for s >= 1; no clipping needed.
        let size = remaining.div_ceil(segments_left);
        ranges.push(SegmentRange::new(start, start + size));
        start += size;
        remaining -= size;
    }
    debug_assert_eq!(start, token_count);
    debug_assert_eq!(remaining, 0);

    Ok(ranges)
}
