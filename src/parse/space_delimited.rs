//! Default parser for whitespace/punctuation-delimited scripts.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::language::LanguageConfig;
use crate::parse::parser::{Parser, ReadingFormat};
use crate::parse::sentence::SentenceSplitter;
use crate::parse::substitution;
use crate::parse::token::ParsedToken;

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" +").expect("multi-space pattern is valid"));

/// Parser for languages whose words are delimited by spaces and punctuation.
///
/// `parse` applies the configured character substitutions, normalizes the
/// text (space runs collapsed, zero-width spaces stripped, CRLF to LF, curly
/// braces to square brackets), then scans each paragraph with the language's
/// word-token pattern. Every pattern match becomes a word token; every gap
/// becomes a non-word token whose end-of-sentence flag comes from the
/// language's sentence-ending character set. Paragraph breaks are emitted as
/// synthetic pilcrow tokens.
///
/// # Examples
///
/// ```
/// use lectio::language::LanguageConfig;
/// use lectio::parse::parser::Parser;
/// use lectio::parse::space_delimited::SpaceDelimitedParser;
///
/// let parser = SpaceDelimitedParser::new();
/// let tokens = parser.parse("Hello world.", &LanguageConfig::new("English")).unwrap();
///
/// let words: Vec<_> = tokens.iter().filter(|t| t.is_word).map(|t| t.text.as_str()).collect();
/// assert_eq!(words, vec!["Hello", "world"]);
/// ```
#[derive(Debug, Default)]
pub struct SpaceDelimitedParser {
    splitter: SentenceSplitter,
}

impl SpaceDelimitedParser {
    /// Create a new space-delimited parser with an empty pattern cache.
    pub fn new() -> Self {
        SpaceDelimitedParser {
            splitter: SentenceSplitter::new(),
        }
    }

    fn normalize(text: &str) -> String {
        MULTI_SPACE
            .replace_all(text, " ")
            .replace('\u{200B}', "")
            .replace("\r\n", "\n")
            .replace('{', "[")
            .replace('}', "]")
    }

    fn parse_paragraph(
        &self,
        text: &str,
        language: &LanguageConfig,
        tokens: &mut Vec<ParsedToken>,
        order: &mut usize,
        sentence_number: &mut usize,
    ) -> Result<()> {
        let word_chars = language.regexp_word_characters.as_deref().unwrap_or("");
        let pattern = self
            .splitter
            .token_pattern(word_chars, language.exceptions_split_sentences.as_deref())?;
        let split_chars = language.regexp_split_sentences.as_deref();

        let mut pos = 0;
        for m in pattern.find_iter(text) {
            if m.start() > pos {
                let gap = &text[pos..m.start()];
                let is_eos = self.splitter.contains_sentence_end(gap, split_chars);
                tokens.push(ParsedToken::non_word(gap, is_eos, *order, *sentence_number));
                *order += 1;
                if is_eos {
                    *sentence_number += 1;
                }
            }

            tokens.push(ParsedToken::word(m.as_str(), *order, *sentence_number));
            *order += 1;
            pos = m.end();
        }

        if pos < text.len() {
            let trailing = &text[pos..];
            let is_eos = self.splitter.contains_sentence_end(trailing, split_chars);
            tokens.push(ParsedToken::non_word(
                trailing,
                is_eos,
                *order,
                *sentence_number,
            ));
            *order += 1;
            if is_eos {
                *sentence_number += 1;
            }
        }

        Ok(())
    }
}

impl Parser for SpaceDelimitedParser {
    fn name(&self) -> &'static str {
        "spacedel"
    }

    fn parse(&self, text: &str, language: &LanguageConfig) -> Result<Vec<ParsedToken>> {
        let substituted =
            substitution::apply(text, language.character_substitutions.as_deref());
        let cleaned = Self::normalize(&substituted);

        let mut tokens = Vec::new();
        let mut order = 0;
        let mut sentence_number = 0;

        let paragraphs: Vec<&str> = cleaned.split('\n').collect();
        let last = paragraphs.len() - 1;
        for (i, paragraph) in paragraphs.iter().enumerate() {
            self.parse_paragraph(
                paragraph,
                language,
                &mut tokens,
                &mut order,
                &mut sentence_number,
            )?;

            if i != last {
                tokens.push(ParsedToken::paragraph_break(order, sentence_number));
                order += 1;
                sentence_number += 1;
            }
        }

        Ok(tokens)
    }

    fn reading(&self, _text: &str, _format: ReadingFormat) -> Result<Option<String>> {
        // Space-delimited scripts need no phonetic gloss.
        Ok(None)
    }

    fn lowercase(&self, text: &str) -> Result<String> {
        Ok(text.to_lowercase())
    }
}
