//! # Segment Plans

use crate::{
    errors::WTResult,
    partition::{SegmentRange, partition},
};

/// The full set of segments for one run, with the token count it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPlan {
    token_count: usize,
    ranges: Vec<SegmentRange>,
}

impl SegmentPlan {
    /// Plan `segments` balanced segments over `token_count` tokens.
    ///
    /// See [`partition`].
    pub fn new(
        token_count: usize,
        segments: usize,
    ) -> WTResult<Self> {
        Ok(Self {
            token_count,
            ranges: partition(token_count, segments)?,
        })
    }

    /// The number of tokens covered.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// The number of segments, including empty ones.
    pub fn segment_count(&self) -> usize {
        self.ranges.len()
    }

    /// The number of segments that cover at least one token.
    pub fn non_empty_count(&self) -> usize {
        self.ranges.iter().filter(|r| !r.is_empty()).count()
    }

    /// The size of the largest segment.
    pub fn max_segment_len(&self) -> usize {
        self.ranges.iter().map(SegmentRange::len).max().unwrap_or(0)
    }

    /// The size of the smallest segment.
    pub fn min_segment_len(&self) -> usize {
        self.ranges.iter().map(SegmentRange::len).min().unwrap_or(0)
    }

    /// The planned segments, in spawn order.
    pub fn ranges(&self) -> &[SegmentRange] {
        &self.ranges
    }

    /// Release the planned segments.
    pub fn into_ranges(self) -> Vec<SegmentRange> {
        self.ranges
    }
}

impl AsRef<[SegmentRange]> for SegmentPlan {
    fn as_ref(&self) -> &[SegmentRange] {
        self.ranges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_stats() {
        let plan = SegmentPlan::new(10, 4).unwrap();
        assert_eq!(plan.token_count(), 10);
        assert_eq!(plan.segment_count(), 4);
        assert_eq!(plan.non_empty_count(), 4);
        assert_eq!(plan.max_segment_len(), 3);
        assert_eq!(plan.min_segment_len(), 2);
        assert_eq!(plan.as_ref().len(), 4);
    }

    #[test]
    fn test_sparse_plan() {
        let plan = SegmentPlan::new(2, 4).unwrap();
        assert_eq!(plan.non_empty_count(), 2);
        assert_eq!(plan.max_segment_len(), 1);
        assert_eq!(plan.min_segment_len(), 0);

        let ranges = plan.into_ranges();
        assert_eq!(ranges.len(), 4);
    }

    #[test]
    fn test_invalid_plan() {
        assert!(SegmentPlan::new(2, 0).is_err());
    }
}
