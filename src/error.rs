//! Error types for the Lectio library.
//!
//! All failures are represented by the [`LectioError`] enum. The engine is a
//! pure, deterministic transform, so every error is surfaced synchronously to
//! the caller; nothing is retried internally.
//!
//! # Examples
//!
//! ```
//! use lectio::error::{LectioError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LectioError::language("unsupported parser type: klingon"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Lectio operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum LectioError {
    /// I/O errors (dictionary loading, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parsing errors (token pattern construction, tokenization)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Language configuration errors (unknown parser type, etc.)
    #[error("Language error: {0}")]
    Language(String),

    /// Morphological segmenter errors, propagated from the collaborator
    #[error("Segmenter error: {0}")]
    Segmenter(String),

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

/// Result type alias for operations that may fail with LectioError.
pub type Result<T> = std::result::Result<T, LectioError>;

impl LectioError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LectioError::Parse(msg.into())
    }

    /// Create a new language error.
    pub fn language<S: Into<String>>(msg: S) -> Self {
        LectioError::Language(msg.into())
    }

    /// Create a new segmenter error.
    pub fn segmenter<S: Into<String>>(msg: S) -> Self {
        LectioError::Segmenter(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LectioError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LectioError::parse("Test parse error");
        assert_eq!(error.to_string(), "Parse error: Test parse error");

        let error = LectioError::language("Test language error");
        assert_eq!(error.to_string(), "Language error: Test language error");

        let error = LectioError::segmenter("Test segmenter error");
        assert_eq!(error.to_string(), "Segmenter error: Test segmenter error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lectio_error = LectioError::from(io_error);

        match lectio_error {
            LectioError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
