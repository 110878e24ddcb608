//! Per-language configuration supplied by the caller.
//!
//! A [`LanguageConfig`] is a plain, read-only value record: the engine never
//! mutates it and holds no reference to it across calls. The configuration
//! layer that owns these records (out of scope here) is responsible for
//! validating the regex fields before invocation.

use serde::{Deserialize, Serialize};

/// Configuration for a single language.
///
/// The string-valued fields use compact wire formats:
///
/// - `character_substitutions` - pipe-separated `from=to` pairs, applied as
///   ordered literal replacements before tokenization
/// - `regexp_split_sentences` - the set of sentence-ending punctuation
///   characters (default `.!?:` when unset)
/// - `exceptions_split_sentences` - pipe-separated literal strings (e.g.
///   abbreviations) that must tokenize as single words
/// - `regexp_word_characters` - a regex character-class body defining what
///   counts as a word character
///
/// # Examples
///
/// ```
/// use lectio::language::LanguageConfig;
///
/// let english = LanguageConfig::new("English")
///     .with_exceptions_split_sentences("Mr.|Mrs.|Dr.");
///
/// assert_eq!(english.parser_type, "spacedel");
/// assert_eq!(english.exceptions_split_sentences.as_deref(), Some("Mr.|Mrs.|Dr."));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Identifier assigned by the configuration store.
    pub id: i64,

    /// Display name of the language.
    pub name: String,

    /// Pipe-separated `from=to` substitution pairs, applied in order.
    pub character_substitutions: Option<String>,

    /// Characters that terminate a sentence.
    pub regexp_split_sentences: Option<String>,

    /// Pipe-separated literals that must not be split at internal punctuation.
    pub exceptions_split_sentences: Option<String>,

    /// Regex character-class body for word characters.
    pub regexp_word_characters: Option<String>,

    /// Rendering hint for right-to-left scripts; not used by the engine.
    pub right_to_left: bool,

    /// Rendering hint for showing romanization; not used by the engine.
    pub show_romanization: bool,

    /// Key into the parser registry, e.g. `spacedel`, `turkish`, `japanese`.
    pub parser_type: String,
}

impl LanguageConfig {
    /// Create a configuration with the default space-delimited parser.
    pub fn new<S: Into<String>>(name: S) -> Self {
        LanguageConfig {
            id: 0,
            name: name.into(),
            character_substitutions: None,
            regexp_split_sentences: None,
            exceptions_split_sentences: None,
            regexp_word_characters: None,
            right_to_left: false,
            show_romanization: false,
            parser_type: "spacedel".to_string(),
        }
    }

    /// Set the parser type.
    pub fn with_parser_type<S: Into<String>>(mut self, parser_type: S) -> Self {
        self.parser_type = parser_type.into();
        self
    }

    /// Set the character substitution rules.
    pub fn with_character_substitutions<S: Into<String>>(mut self, config: S) -> Self {
        self.character_substitutions = Some(config.into());
        self
    }

    /// Set the sentence-ending character set.
    pub fn with_regexp_split_sentences<S: Into<String>>(mut self, config: S) -> Self {
        self.regexp_split_sentences = Some(config.into());
        self
    }

    /// Set the sentence-split exception literals.
    pub fn with_exceptions_split_sentences<S: Into<String>>(mut self, config: S) -> Self {
        self.exceptions_split_sentences = Some(config.into());
        self
    }

    /// Set the word-character class body.
    pub fn with_regexp_word_characters<S: Into<String>>(mut self, config: S) -> Self {
        self.regexp_word_characters = Some(config.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LanguageConfig::new("English");
        assert_eq!(config.name, "English");
        assert_eq!(config.parser_type, "spacedel");
        assert!(config.character_substitutions.is_none());
        assert!(config.regexp_word_characters.is_none());
        assert!(!config.right_to_left);
    }

    #[test]
    fn test_builder_methods() {
        let config = LanguageConfig::new("Japanese")
            .with_parser_type("japanese")
            .with_character_substitutions("｡=。")
            .with_regexp_split_sentences("。！？");

        assert_eq!(config.parser_type, "japanese");
        assert_eq!(config.character_substitutions.as_deref(), Some("｡=。"));
        assert_eq!(config.regexp_split_sentences.as_deref(), Some("。！？"));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = LanguageConfig::new("Turkish").with_parser_type("turkish");
        let json = serde_json::to_string(&config).unwrap();
        let back: LanguageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
