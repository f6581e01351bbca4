//! # Counting
//!
//! [`FrequencyTable`] and the single-segment counting step run by each task.

mod frequency_table;
mod segment_counter;

#[doc(inline)]
pub use frequency_table::FrequencyTable;
#[doc(inline)]
pub use segment_counter::{TaskId, count_segment, count_segment_cancellable};
