//! Word tokenizer matching the training-time analyzer.
//!
//! The model artifact is produced by a TF-IDF vectorizer configured with
//! `lowercase=true` and the token pattern `\b\w\w+\b`. Inference must
//! reproduce those semantics exactly: case-fold, NFKC-normalize, then take
//! maximal runs of word characters of length >= 2. Single-character tokens
//! ("a", "I") are always dropped; punctuation, whitespace, symbols, and
//! emoji act as separators.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, SentiraError};

/// Unicode-aware equivalent of the training-time token pattern.
const WORD_PATTERN: &str = r"\b\w\w+\b";

/// A regex-based word tokenizer.
///
/// Produces a possibly-empty sequence of normalized tokens; empty input is
/// not an error. Order is preserved and duplicates are retained.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Regex,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(WORD_PATTERN)
            .map_err(|e| SentiraError::analysis(format!("Invalid token pattern: {e}")))?;

        Ok(WordTokenizer { pattern })
    }

    /// Tokenize the given text.
    ///
    /// Lower-cases, applies NFKC normalization, then extracts word runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentira::analysis::WordTokenizer;
    ///
    /// let tokenizer = WordTokenizer::new().unwrap();
    /// let tokens = tokenizer.tokenize("Hello, world!");
    /// assert_eq!(tokens, vec!["hello", "world"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        // Lower-case before normalizing, matching the training analyzer.
        let normalized: String = text.to_lowercase().nfkc().collect();

        self.pattern
            .find_iter(&normalized)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "word"
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}
