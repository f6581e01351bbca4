//! # `wordtally` Partitioned Word Counting
//!
//! `wordtally` counts word frequencies over an in-memory token sequence by
//! splitting the sequence into `K` contiguous segments, counting each segment
//! on its own worker, and folding the per-segment tables into one.
//!
//! See:
//! * [`partition()`] to split `N` tokens into `K` balanced [`SegmentRange`]s.
//! * [`reduce()`] and [`ConcurrentReducer`] to count segments concurrently and merge the results.
//! * [`counting`] for [`FrequencyTable`] and the single-segment counting step.
//! * [`WordTokenizer`] for a reference word tokenizer.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Counting Words
//!
//! ```rust
//! use wordtally::{
//!     ReducerOptions,
//!     WordTokenizer,
//!     partition,
//! };
//!
//! # fn main() -> wordtally::WTResult<()> {
//! let tokenizer = WordTokenizer::default_words()?;
//! let tokens: Vec<String> = tokenizer.tokenize("A b, a; c B a!");
//!
//! let ranges = partition(tokens.len(), 3)?;
//! let reducer = ReducerOptions::default().init();
//! let table = reducer.reduce::<_, u64>(&tokens, &ranges)?;
//!
//! assert_eq!(table.get("a"), Some(3));
//! assert_eq!(table.get("b"), Some(2));
//! assert_eq!(table.get("c"), Some(1));
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs, unused)]

pub mod concurrency;
pub mod counting;
pub mod errors;
pub mod partition;
pub mod reduce;
pub mod tokenize;
pub mod types;

#[doc(inline)]
pub use counting::{FrequencyTable, TaskId, count_segment};
#[doc(inline)]
pub use errors::{WTResult, WordtallyError};
#[doc(inline)]
pub use partition::{SegmentPlan, SegmentRange, partition};
#[doc(inline)]
pub use reduce::{ConcurrentReducer, ReducerOptions, count_words, merge_tables, reduce};
#[doc(inline)]
pub use tokenize::{TokenizerOptions, WordTokenizer};
#[doc(inline)]
pub use types::{CountType, TokenKey};
