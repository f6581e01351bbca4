//! # Tokenization
//!
//! A reference word tokenizer for feeding [`crate::reduce`].
//!
//! Counting never depends on how tokens were produced; any `&[K]` works.

mod word_tokenizer;

#[doc(inline)]
pub use word_tokenizer::{ASCII_WORD_PATTERN, DEFAULT_WORD_PATTERN, TokenizerOptions, WordTokenizer};
