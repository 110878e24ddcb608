//! Turkish parser: space-delimited tokenization with Turkish casing.

use crate::error::Result;
use crate::language::LanguageConfig;
use crate::parse::parser::{Parser, ReadingFormat};
use crate::parse::space_delimited::SpaceDelimitedParser;
use crate::parse::token::ParsedToken;

/// Parser for Turkish text.
///
/// Tokenization is identical to [`SpaceDelimitedParser`]; only the casing
/// transform differs. Naive lowercasing maps both Turkish capital I's to the
/// wrong target, so `İ` (dotted) and `I` (dotless-expected) are mapped to
/// `i` and `ı` before the generic transform runs.
#[derive(Debug, Default)]
pub struct TurkishParser {
    inner: SpaceDelimitedParser,
}

impl TurkishParser {
    /// Create a new Turkish parser.
    pub fn new() -> Self {
        TurkishParser {
            inner: SpaceDelimitedParser::new(),
        }
    }
}

impl Parser for TurkishParser {
    fn name(&self) -> &'static str {
        "turkish"
    }

    fn parse(&self, text: &str, language: &LanguageConfig) -> Result<Vec<ParsedToken>> {
        self.inner.parse(text, language)
    }

    fn reading(&self, text: &str, format: ReadingFormat) -> Result<Option<String>> {
        self.inner.reading(text, format)
    }

    fn lowercase(&self, text: &str) -> Result<String> {
        let mapped = text.replace('İ', "i").replace('I', "\u{0131}");
        Ok(mapped.to_lowercase())
    }
}
