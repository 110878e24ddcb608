//! Sentence-boundary detection and word-token pattern construction.
//!
//! [`SentenceSplitter`] compiles two kinds of Unicode-aware patterns from
//! per-language configuration strings and memoizes them, keyed on the literal
//! configuration text, so repeated parse calls for the same language never
//! recompile. The caches live on the instance rather than in a global so
//! tests can run in isolation and the cache lifecycle stays explicit.
//!
//! # Thread safety
//!
//! The caches are safe under concurrent read/populate. Two threads racing to
//! populate the same key compile identical patterns, so last-writer-wins is
//! harmless.

use ahash::AHashMap;
use parking_lot::RwLock;
use regex::Regex;

use crate::error::{LectioError, Result};

/// Sentence-ending punctuation used when a language configures none.
pub const DEFAULT_SPLIT_CHARS: &str = ".!?:";

/// Word-character class body used when a language configures none: Unicode
/// letters, combining marks, modifier symbols, and the apostrophe.
pub const DEFAULT_WORD_CHARACTERS: &str = r"\p{L}\p{M}\p{Sk}'";

/// Compiles and caches the per-language patterns used during tokenization.
///
/// # Examples
///
/// ```
/// use lectio::parse::sentence::SentenceSplitter;
///
/// let splitter = SentenceSplitter::new();
/// assert!(splitter.contains_sentence_end("Done.", None));
/// assert!(!splitter.contains_sentence_end("Done,", None));
/// ```
#[derive(Debug, Default)]
pub struct SentenceSplitter {
    sentence_end_cache: RwLock<AHashMap<String, Regex>>,
    token_pattern_cache: RwLock<AHashMap<String, Regex>>,
}

impl SentenceSplitter {
    /// Create a splitter with empty pattern caches.
    pub fn new() -> Self {
        SentenceSplitter {
            sentence_end_cache: RwLock::new(AHashMap::new()),
            token_pattern_cache: RwLock::new(AHashMap::new()),
        }
    }

    /// Check whether `text` contains any sentence-ending character.
    ///
    /// `split_chars` is the configured set of sentence-ending characters;
    /// `None` or blank falls back to [`DEFAULT_SPLIT_CHARS`].
    pub fn contains_sentence_end(&self, text: &str, split_chars: Option<&str>) -> bool {
        let chars = match split_chars {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_SPLIT_CHARS,
        };

        if let Some(pattern) = self.sentence_end_cache.read().get(chars) {
            return pattern.is_match(text);
        }

        // Every character is escaped, so the class always compiles.
        let pattern = Regex::new(&format!("[{}]", regex::escape(chars)))
            .expect("escaped character class is a valid pattern");
        let is_match = pattern.is_match(text);
        self.sentence_end_cache
            .write()
            .insert(chars.to_string(), pattern);
        is_match
    }

    /// Build the pattern matching one word token.
    ///
    /// The pattern matches either one of the configured exception literals
    /// (with embedded `.` escaped so an abbreviation like `Mr.` stays one
    /// token) or a run of word-class characters. Exceptions come first in the
    /// alternation, so they win over the generic run at each position.
    ///
    /// `word_chars` is a regex character-class body; blank falls back to
    /// [`DEFAULT_WORD_CHARACTERS`]. A caller-supplied class that fails to
    /// compile propagates as a parse error; the configuration layer is
    /// expected to validate these fields ahead of time.
    pub fn token_pattern(&self, word_chars: &str, exceptions: Option<&str>) -> Result<Regex> {
        let char_class = if word_chars.trim().is_empty() {
            DEFAULT_WORD_CHARACTERS
        } else {
            word_chars
        };
        let exceptions = exceptions.map(str::trim).unwrap_or("");
        let cache_key = format!("{char_class}|{exceptions}");

        if let Some(pattern) = self.token_pattern_cache.read().get(&cache_key) {
            return Ok(pattern.clone());
        }

        let source = if exceptions.is_empty() {
            format!("([{char_class}]+)")
        } else {
            let escaped_exceptions = exceptions.replace('.', "\\.");
            format!("({escaped_exceptions}|[{char_class}]+)")
        };
        let pattern = Regex::new(&source)
            .map_err(|e| LectioError::parse(format!("invalid word token pattern: {e}")))?;

        self.token_pattern_cache
            .write()
            .insert(cache_key, pattern.clone());
        Ok(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_sentence_end_defaults() {
        let splitter = SentenceSplitter::new();
        assert!(splitter.contains_sentence_end(".", None));
        assert!(splitter.contains_sentence_end("!", None));
        assert!(splitter.contains_sentence_end("?", None));
        assert!(splitter.contains_sentence_end(":", None));
        assert!(!splitter.contains_sentence_end(" ", None));
        assert!(!splitter.contains_sentence_end(",", None));
    }

    #[test]
    fn test_contains_sentence_end_custom_chars() {
        let splitter = SentenceSplitter::new();
        assert!(splitter.contains_sentence_end(";", Some(";")));
        assert!(!splitter.contains_sentence_end(".", Some(";")));
    }

    #[test]
    fn test_contains_sentence_end_blank_falls_back() {
        let splitter = SentenceSplitter::new();
        assert!(splitter.contains_sentence_end(".", Some("")));
        assert!(splitter.contains_sentence_end(".", Some("  ")));
    }

    #[test]
    fn test_token_pattern_matches_word_characters() {
        let splitter = SentenceSplitter::new();
        let pattern = splitter.token_pattern("a-z", None).unwrap();
        let matches: Vec<_> = pattern
            .find_iter("hello world")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(matches, vec!["hello", "world"]);
    }

    #[test]
    fn test_token_pattern_default_class_is_unicode() {
        let splitter = SentenceSplitter::new();
        let pattern = splitter.token_pattern("", None).unwrap();
        let matches: Vec<_> = pattern
            .find_iter("naïve приём can't")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(matches, vec!["naïve", "приём", "can't"]);
    }

    #[test]
    fn test_token_pattern_exceptions_win() {
        let splitter = SentenceSplitter::new();
        let pattern = splitter.token_pattern("", Some("Mr.|Dr.")).unwrap();
        let matches: Vec<_> = pattern
            .find_iter("Mr. Smith met Dr. Jones")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(matches, vec!["Mr.", "Smith", "met", "Dr.", "Jones"]);
    }

    #[test]
    fn test_token_pattern_escapes_exception_periods() {
        let splitter = SentenceSplitter::new();
        let pattern = splitter.token_pattern("a-z", Some("a.b")).unwrap();
        // The period is literal, so "axb" must not match the exception.
        assert_eq!(pattern.find("axb").unwrap().as_str(), "axb");
        assert_eq!(pattern.find("a.b").unwrap().as_str(), "a.b");
    }

    #[test]
    fn test_token_pattern_invalid_class_is_an_error() {
        let splitter = SentenceSplitter::new();
        assert!(splitter.token_pattern(r"\p{Bogus}", None).is_err());
    }

    #[test]
    fn test_patterns_are_cached() {
        let splitter = SentenceSplitter::new();
        splitter.contains_sentence_end(".", None);
        splitter.token_pattern("", None).unwrap();
        assert_eq!(splitter.sentence_end_cache.read().len(), 1);
        assert_eq!(splitter.token_pattern_cache.read().len(), 1);

        // Same configuration reuses the cached entry.
        splitter.contains_sentence_end("!", None);
        splitter.token_pattern("", None).unwrap();
        assert_eq!(splitter.sentence_end_cache.read().len(), 1);
        assert_eq!(splitter.token_pattern_cache.read().len(), 1);
    }
}
