//! # Segment Ranges

use core::{fmt, ops::Range};

use crate::errors::{WTResult, WordtallyError};

/// A contiguous segment of a token sequence, assigned to one counting task.
///
/// Stored half-open (`start..end`); [`SegmentRange::first`] and
/// [`SegmentRange::last`] give the inclusive view. A range with
/// `start == end` is empty; such ranges only appear after every token
/// has been assigned to an earlier segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SegmentRange {
    start: usize,
    end: usize,
}

impl SegmentRange {
    /// Create a new half-open range `start..end`.
    ///
    /// ## Panics
    /// If `start > end`.
    pub fn new(
        start: usize,
        end: usize,
    ) -> Self {
        assert!(start <= end, "segment start ({start}) > end ({end})");
        Self { start, end }
    }

    /// Create an empty range positioned at `at`.
    pub fn empty_at(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// The first index covered by this segment, or the insertion point if empty.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index covered by this segment.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The number of tokens in this segment.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Does this segment cover no tokens?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The first (inclusive) index, if non-empty.
    pub fn first(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.start)
    }

    /// The last (inclusive) index, if non-empty.
    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end - 1)
    }

    /// The inclusive `(first, last)` pair, if non-empty.
    pub fn inclusive_bounds(&self) -> Option<(usize, usize)> {
        self.first().zip(self.last())
    }

    /// Does this segment contain `idx`?
    pub fn contains(
        &self,
        idx: usize,
    ) -> bool {
        self.start <= idx && idx < self.end
    }

    /// View as a [`Range<usize>`], for slicing.
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl TryFrom<Range<usize>> for SegmentRange {
    type Error = WordtallyError;

    fn try_from(range: Range<usize>) -> WTResult<Self> {
        if range.start > range.end {
            return Err(WordtallyError::invalid_argument(
                "range",
                format!("start ({}) > end ({})", range.start, range.end),
            ));
        }
        Ok(Self::new(range.start, range.end))
    }
}

impl From<SegmentRange> for Range<usize> {
    fn from(range: SegmentRange) -> Self {
        range.as_range()
    }
}

impl fmt::Display for SegmentRange {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.inclusive_bounds() {
            Some((first, last)) => write!(f, "[{first}, {last}]"),
            None => write!(f, "[empty @ {}]", self.start),
        }
    }
}
