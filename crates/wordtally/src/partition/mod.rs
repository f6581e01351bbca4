//! # Partitioning
//!
//! Splits `N` tokens among `K` counting tasks as evenly as possible.
//!
//! * [`partition`] - the greedy balanced-remainder split.
//! * [`SegmentRange`] - one contiguous segment.
//! * [`SegmentPlan`] - a split, with summary statistics.

mod balanced;
mod segment_plan;
mod segment_range;

#[doc(inline)]
pub use balanced::partition;
#[doc(inline)]
pub use segment_plan::SegmentPlan;
#[doc(inline)]
pub use segment_range::SegmentRange;
