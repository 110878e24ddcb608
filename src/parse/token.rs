//! Token types for text parsing.
//!
//! This module defines [`ParsedToken`], the fundamental unit produced by every
//! parser in the engine. A parse call turns the (substituted, normalized)
//! input into an ordered token sequence that is lossless: concatenating the
//! tokens' text in `order` reproduces the input exactly, whitespace included.
//!
//! # Examples
//!
//! Creating a word token:
//!
//! ```
//! use lectio::parse::token::ParsedToken;
//!
//! let token = ParsedToken::word("Hello", 0, 0);
//! assert_eq!(token.text, "Hello");
//! assert!(token.is_word);
//! assert!(!token.is_end_of_sentence);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The synthetic token text marking a paragraph boundary.
pub const PARAGRAPH_MARK: &str = "\u{00B6}";

/// A single classified span of parsed text.
///
/// # Fields
///
/// - `text` - The span's text content (non-word spans are preserved verbatim)
/// - `is_word` - Whether the span matched the language's word pattern
/// - `is_end_of_sentence` - Whether the span terminates a sentence
/// - `order` - Position in the token sequence (0-based, strictly increasing)
/// - `sentence_number` - Sentence the token belongs to (0-based, non-decreasing)
///
/// `sentence_number` increments by exactly one immediately after a token with
/// `is_end_of_sentence` set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToken {
    /// The text content of the token.
    pub text: String,

    /// Whether this token is a word.
    pub is_word: bool,

    /// Whether this token terminates a sentence.
    pub is_end_of_sentence: bool,

    /// The position of the token in the parse output (0-based).
    pub order: usize,

    /// The sentence this token belongs to (0-based).
    pub sentence_number: usize,
}

impl ParsedToken {
    /// Create a word token. Word tokens never terminate a sentence themselves.
    pub fn word<S: Into<String>>(text: S, order: usize, sentence_number: usize) -> Self {
        ParsedToken {
            text: text.into(),
            is_word: true,
            is_end_of_sentence: false,
            order,
            sentence_number,
        }
    }

    /// Create a non-word token.
    pub fn non_word<S: Into<String>>(
        text: S,
        is_end_of_sentence: bool,
        order: usize,
        sentence_number: usize,
    ) -> Self {
        ParsedToken {
            text: text.into(),
            is_word: false,
            is_end_of_sentence,
            order,
            sentence_number,
        }
    }

    /// Create the synthetic pilcrow token marking a paragraph break.
    ///
    /// Paragraph breaks are always sentence boundaries.
    pub fn paragraph_break(order: usize, sentence_number: usize) -> Self {
        ParsedToken {
            text: PARAGRAPH_MARK.to_string(),
            is_word: false,
            is_end_of_sentence: true,
            order,
            sentence_number,
        }
    }

    /// Check whether this token is a paragraph break.
    pub fn is_paragraph_break(&self) -> bool {
        self.text == PARAGRAPH_MARK
    }
}

impl fmt::Display for ParsedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_token() {
        let token = ParsedToken::word("hello", 3, 1);
        assert_eq!(token.text, "hello");
        assert!(token.is_word);
        assert!(!token.is_end_of_sentence);
        assert_eq!(token.order, 3);
        assert_eq!(token.sentence_number, 1);
    }

    #[test]
    fn test_non_word_token() {
        let token = ParsedToken::non_word(". ", true, 1, 0);
        assert_eq!(token.text, ". ");
        assert!(!token.is_word);
        assert!(token.is_end_of_sentence);
    }

    #[test]
    fn test_paragraph_break() {
        let token = ParsedToken::paragraph_break(5, 2);
        assert_eq!(token.text, "¶");
        assert!(!token.is_word);
        assert!(token.is_end_of_sentence);
        assert!(token.is_paragraph_break());
    }

    #[test]
    fn test_display() {
        let token = ParsedToken::word("hello", 0, 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_serde_round_trip() {
        let token = ParsedToken::non_word("! ", true, 7, 2);
        let json = serde_json::to_string(&token).unwrap();
        let back: ParsedToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
