//! Parser registry keyed by the configured parser-type string.

use ahash::AHashMap;
use std::sync::Arc;

use crate::error::{LectioError, Result};
use crate::language::LanguageConfig;
use crate::parse::japanese::JapaneseParser;
use crate::parse::parser::Parser;
use crate::parse::space_delimited::SpaceDelimitedParser;
use crate::parse::turkish::TurkishParser;

/// Registry mapping a language's configured parser type to a parser instance.
///
/// This is the single validation point for parser types: looking up an
/// unregistered string fails with an "unsupported parser type" error, and the
/// configuration layer is expected to check [`ParserFactory::supported_parser_types`]
/// when a language is created or edited.
///
/// # Examples
///
/// ```
/// use lectio::language::LanguageConfig;
/// use lectio::parse::factory::ParserFactory;
///
/// let factory = ParserFactory::new().unwrap();
/// let parser = factory.parser_for_language(&LanguageConfig::new("English")).unwrap();
/// assert_eq!(parser.name(), "spacedel");
/// ```
pub struct ParserFactory {
    parsers: AHashMap<String, Arc<dyn Parser>>,
}

impl ParserFactory {
    /// Create a factory with the built-in parsers registered:
    /// `spacedel`, `turkish`, and `japanese`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Japanese parser's dictionary cannot be loaded.
    pub fn new() -> Result<Self> {
        let mut factory = Self::empty();
        factory.register("spacedel", Arc::new(SpaceDelimitedParser::new()));
        factory.register("turkish", Arc::new(TurkishParser::new()));
        factory.register("japanese", Arc::new(JapaneseParser::new()?));
        Ok(factory)
    }

    /// Create a factory with no parsers registered.
    pub fn empty() -> Self {
        ParserFactory {
            parsers: AHashMap::new(),
        }
    }

    /// Register a parser under the given parser-type key, replacing any
    /// previous registration.
    pub fn register<S: Into<String>>(&mut self, parser_type: S, parser: Arc<dyn Parser>) {
        self.parsers.insert(parser_type.into(), parser);
    }

    /// Look up the parser for a parser-type string.
    pub fn parser(&self, parser_type: &str) -> Result<&Arc<dyn Parser>> {
        self.parsers.get(parser_type).ok_or_else(|| {
            LectioError::language(format!("unsupported parser type: {parser_type}"))
        })
    }

    /// Look up the parser configured for a language.
    pub fn parser_for_language(&self, language: &LanguageConfig) -> Result<&Arc<dyn Parser>> {
        self.parser(&language.parser_type)
    }

    /// The registered parser-type keys, for configuration-time validation.
    pub fn supported_parser_types(&self) -> Vec<&str> {
        self.parsers.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_parsers() {
        let factory = ParserFactory::new().unwrap();
        assert_eq!(factory.parser("spacedel").unwrap().name(), "spacedel");
        assert_eq!(factory.parser("turkish").unwrap().name(), "turkish");
        assert_eq!(factory.parser("japanese").unwrap().name(), "japanese");
    }

    #[test]
    fn test_unknown_parser_type_is_an_error() {
        let factory = ParserFactory::new().unwrap();
        let err = factory.parser("klingon").err().unwrap();
        assert!(matches!(err, LectioError::Language(_)));
        assert!(err.to_string().contains("unsupported parser type"));
    }

    #[test]
    fn test_parser_for_language() {
        let factory = ParserFactory::new().unwrap();
        let language = LanguageConfig::new("Turkish").with_parser_type("turkish");
        assert_eq!(factory.parser_for_language(&language).unwrap().name(), "turkish");
    }

    #[test]
    fn test_supported_parser_types() {
        let factory = ParserFactory::new().unwrap();
        let mut types = factory.supported_parser_types();
        types.sort_unstable();
        assert_eq!(types, vec!["japanese", "spacedel", "turkish"]);
    }

    #[test]
    fn test_register_adds_parser() {
        let mut factory = ParserFactory::empty();
        assert!(factory.parser("spacedel").is_err());
        factory.register("spacedel", Arc::new(SpaceDelimitedParser::new()));
        assert!(factory.parser("spacedel").is_ok());
    }
}
