//! Error types for the Sentira library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SentiraError`] enum. Model shape problems are reported once at load
//! time; the inference path itself only fails on empty input.
//!
//! # Examples
//!
//! ```
//! use sentira::error::{Result, SentiraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentiraError::invalid_model("coef has 2 rows but 3 classes"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sentira operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum SentiraError {
    /// Model document violates a shape invariant (mismatched lengths,
    /// duplicate vocabulary terms, missing fields). Raised at load time
    /// only; a model that passes validation is never re-checked per call.
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Input text was empty after trimming. Recoverable by the caller;
    /// prompting for input is the expected response.
    #[error("Empty input: text must contain at least one non-whitespace character")]
    EmptyInput,

    /// Analysis-related errors (tokenizer construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (reading model files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentiraError.
pub type Result<T> = std::result::Result<T, SentiraError>;

impl SentiraError {
    /// Create a new invalid-model error.
    pub fn invalid_model<S: Into<String>>(msg: S) -> Self {
        SentiraError::InvalidModel(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentiraError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentiraError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SentiraError::invalid_model("idf length 3 != vocabulary length 4");
        assert_eq!(
            error.to_string(),
            "Invalid model: idf length 3 != vocabulary length 4"
        );

        let error = SentiraError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_empty_input_display() {
        let error = SentiraError::EmptyInput;
        assert!(error.to_string().starts_with("Empty input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sentira_error = SentiraError::from(io_error);

        match sentira_error {
            SentiraError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
