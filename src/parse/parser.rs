//! The parser capability trait implemented by every language tokenizer.

use crate::error::Result;
use crate::language::LanguageConfig;
use crate::parse::token::ParsedToken;

/// Output format selector for phonetic readings.
///
/// Parsers without reading support ignore the selector entirely. The labels
/// accepted by [`ReadingFormat::from_label`] are the strings the presentation
/// layer sends; anything unrecognized falls back to the katakana default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReadingFormat {
    /// Raw katakana reading, as supplied by the morphological segmenter.
    /// This is the no-format default.
    #[default]
    Katakana,
    /// Reading converted to hiragana.
    Hiragana,
    /// Reading transliterated to Latin letters (labels `romaji` and
    /// `alphabet`).
    Romaji,
    /// Inline furigana: `surface(reading)` per annotated span.
    Furigana,
    /// HTML ruby markup: `<ruby>surface<rt>reading</rt></ruby>` per span.
    HtmlFurigana,
}

impl ReadingFormat {
    /// Map a presentation-layer format label to a `ReadingFormat`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("hiragana") => ReadingFormat::Hiragana,
            Some("katakana") => ReadingFormat::Katakana,
            Some("romaji") | Some("alphabet") => ReadingFormat::Romaji,
            Some("furigana") => ReadingFormat::Furigana,
            Some("html-furigana") => ReadingFormat::HtmlFurigana,
            _ => ReadingFormat::default(),
        }
    }
}

/// Trait for language-specific tokenizers.
///
/// A parser turns raw text plus a [`LanguageConfig`] into an ordered,
/// lossless sequence of [`ParsedToken`]s, and supplies the per-language
/// normalization used as the vocabulary lookup key.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync`; parsers are shared across worker threads
/// and every operation is a synchronous, CPU-bound transform.
pub trait Parser: Send + Sync {
    /// The parser's identity - a parser type, not a language (several
    /// languages may share one parser).
    fn name(&self) -> &'static str;

    /// Parse `text` into an ordered token sequence.
    fn parse(&self, text: &str, language: &LanguageConfig) -> Result<Vec<ParsedToken>>;

    /// Produce a phonetic reading of `text` in the requested format.
    ///
    /// Returns `Ok(None)` when no annotation is needed: the script carries
    /// its own pronunciation, or the reading would add no information over
    /// the input.
    fn reading(&self, text: &str, format: ReadingFormat) -> Result<Option<String>>;

    /// The per-language case/script normalization used as the vocabulary
    /// lookup key. This is not guaranteed to equal locale-naive lowercasing.
    fn lowercase(&self, text: &str) -> Result<String>;
}
