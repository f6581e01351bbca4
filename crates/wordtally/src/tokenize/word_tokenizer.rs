//! # Word Tokenizer

use std::borrow::Cow;

use regex::Regex;

use crate::{errors::WTResult, types::TokenKey};

/// Unicode word runs.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+";

/// ASCII-only word runs: `[0-9A-Za-z_]+`.
pub const ASCII_WORD_PATTERN: &str = r"(?-u:\w)+";

/// Options for [`WordTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Case-fold text before matching.
    pub lowercase: bool,

    /// The pattern matching a single word.
    pub pattern: String,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            pattern: DEFAULT_WORD_PATTERN.to_string(),
        }
    }
}

impl TokenizerOptions {
    /// Set whether text is case-folded before matching.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Set the word pattern.
    pub fn with_pattern(
        self,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }

    /// Compile a [`WordTokenizer`].
    pub fn init(self) -> WTResult<WordTokenizer> {
        WordTokenizer::new(self)
    }
}

/// Splits text into normalized words.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    options: TokenizerOptions,
    regex: Regex,
}

impl WordTokenizer {
    /// Compile a new tokenizer.
    ///
    /// ## Errors
    /// [`crate::WordtallyError::Pattern`] if the pattern does not compile.
    pub fn new(options: TokenizerOptions) -> WTResult<Self> {
        let regex = Regex::new(&options.pattern)?;
        Ok(Self { options, regex })
    }

    /// A lower-casing tokenizer over [`DEFAULT_WORD_PATTERN`].
    pub fn default_words() -> WTResult<Self> {
        Self::new(TokenizerOptions::default())
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Split `text` into words, in order of appearance.
    ///
    /// Never yields empty words.
    pub fn tokenize<K: TokenKey>(
        &self,
        text: &str,
    ) -> Vec<K> {
        let text: Cow<'_, str> = if self.options.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };

        self.regex
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|w| !w.is_empty())
            .map(|w| K::from(w))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use compact_str::CompactString;

    use super::*;
    use crate::errors::WordtallyError;

    #[test]
    fn test_default_words() {
        let tokenizer = WordTokenizer::default_words().unwrap();
        let words: Vec<String> = tokenizer.tokenize("  The cat; the HAT!\n\tdon't_stop 42 ");
        assert_eq!(
            words,
            vec!["the", "cat", "the", "hat", "don", "t_stop", "42"]
        );
    }

    #[test]
    fn test_keep_case() {
        let tokenizer = TokenizerOptions::default()
            .with_lowercase(false)
            .init()
            .unwrap();
        let words: Vec<CompactString> = tokenizer.tokenize("Hello hello");
        assert_eq!(words, vec!["Hello", "hello"]);
        assert!(!tokenizer.options().lowercase);
    }

    #[test]
    fn test_ascii_words() {
        let tokenizer = TokenizerOptions::default()
            .with_pattern(ASCII_WORD_PATTERN)
            .init()
            .unwrap();
        let words: Vec<String> = tokenizer.tokenize("Café naïve");
        assert_eq!(words, vec!["caf", "na", "ve"]);

        let unicode = WordTokenizer::default_words().unwrap();
        let words: Vec<String> = unicode.tokenize("Café naïve");
        assert_eq!(words, vec!["café", "naïve"]);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = WordTokenizer::default_words().unwrap();
        assert!(tokenizer.tokenize::<String>("").is_empty());
        assert!(tokenizer.tokenize::<String>(" ,.;!? ").is_empty());
    }

    #[test]
    fn test_bad_pattern() {
        let err = TokenizerOptions::default()
            .with_pattern("(")
            .init()
            .unwrap_err();
        assert!(matches!(err, WordtallyError::Pattern(_)));
    }
}
