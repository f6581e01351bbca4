//! # Concurrent Reduction
//!
//! Runs one counting task per [`SegmentRange`], waits for all of them,
//! then folds the partial tables into one.
//!
//! ```rust
//! use wordtally::{FrequencyTable, partition, reduce};
//!
//! let tokens: Vec<String> = "a b a c b a".split(' ').map(String::from).collect();
//! let ranges = partition(tokens.len(), 3).unwrap();
//!
//! let table: FrequencyTable<String, u32> = reduce(&tokens, &ranges).unwrap();
//! assert_eq!(table.get("a"), Some(3));
//! ```

mod concurrent_reducer;
mod merge;
mod reducer_options;
mod task_runner;

#[doc(inline)]
pub use concurrent_reducer::ConcurrentReducer;
#[doc(inline)]
pub use merge::merge_tables;
#[doc(inline)]
pub use reducer_options::{DEFAULT_CANCEL_CHECK_INTERVAL, ReducerOptions};

use crate::{
    counting::FrequencyTable,
    errors::WTResult,
    partition::{SegmentRange, partition},
    types::{CountType, TokenKey},
};

/// Count `tokens` over `ranges` with default [`ReducerOptions`].
///
/// See [`ConcurrentReducer::reduce`].
pub fn reduce<K, C>(
    tokens: &[K],
    ranges: &[SegmentRange],
) -> WTResult<FrequencyTable<K, C>>
where
    K: TokenKey,
    C: CountType,
{
    ConcurrentReducer::default().reduce(tokens, ranges)
}

/// Partition `tokens` into `segments` balanced ranges, then reduce.
///
/// ## Errors
/// * [`crate::WordtallyError::InvalidArgument`] if `segments == 0`.
/// * Any error from [`ConcurrentReducer::reduce`].
pub fn count_words<K, C>(
    tokens: &[K],
    segments: usize,
    options: ReducerOptions,
) -> WTResult<FrequencyTable<K, C>>
where
    K: TokenKey,
    C: CountType,
{
    let ranges = partition(tokens.len(), segments)?;
    options.init().reduce(tokens, &ranges)
}
