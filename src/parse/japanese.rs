//! Japanese parser: morphology-backed tokenization, readings, and furigana.
//!
//! Segmentation is delegated to a [`MorphologicalSegmenter`]; this module
//! layers content-word classification, reading extraction, furigana
//! rendering, and katakana-to-romaji transliteration on top.

pub mod morphology;
pub mod romaji;

use std::sync::Arc;

use crate::error::Result;
use crate::language::LanguageConfig;
use crate::parse::parser::{Parser, ReadingFormat};
use crate::parse::token::ParsedToken;

use self::morphology::{LinderaSegmenter, Morpheme, MorphologicalSegmenter};
use self::romaji::katakana_to_romaji;

/// Primary POS labels counted as content words: nouns, verbs, adjectives,
/// adjectival nouns, adverbs.
const CONTENT_WORD_POS: &[&str] = &["名詞", "動詞", "形容詞", "形容動詞", "副詞"];

/// Surface forms that terminate a sentence.
const SENTENCE_END_SURFACES: &[&str] = &["。", "！", "？"];

/// Replacement character left behind by broken dictionary encodings.
const MOJIBAKE: char = '\u{FFFD}';

/// Parser for Japanese text.
///
/// Tokens map 1:1 onto the segmenter's morphemes. `reading` produces a
/// phonetic gloss in the requested [`ReadingFormat`]; `lowercase` normalizes
/// to the hiragana reading, which is the vocabulary lookup key for Japanese.
pub struct JapaneseParser {
    segmenter: Arc<dyn MorphologicalSegmenter>,
}

impl JapaneseParser {
    /// Create a parser backed by the embedded IPADIC Lindera segmenter.
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot be loaded.
    pub fn new() -> Result<Self> {
        Ok(Self::with_segmenter(Arc::new(LinderaSegmenter::ipadic()?)))
    }

    /// Create a parser over an injected segmenter.
    pub fn with_segmenter(segmenter: Arc<dyn MorphologicalSegmenter>) -> Self {
        JapaneseParser { segmenter }
    }

    /// Language codes this parser is intended for.
    pub fn supported_language_codes(&self) -> &'static [&'static str] {
        &["ja"]
    }

    fn render_furigana(morphemes: &[Morpheme], html: bool) -> String {
        let mut out = String::new();
        for morpheme in morphemes {
            match usable_reading(morpheme).filter(|_| has_kanji(&morpheme.surface)) {
                Some(reading) => {
                    let gloss = to_hiragana(reading);
                    if html {
                        out.push_str("<ruby>");
                        out.push_str(&morpheme.surface);
                        out.push_str("<rt>");
                        out.push_str(&gloss);
                        out.push_str("</rt></ruby>");
                    } else {
                        out.push_str(&morpheme.surface);
                        out.push('(');
                        out.push_str(&gloss);
                        out.push(')');
                    }
                }
                None => out.push_str(&morpheme.surface),
            }
        }
        out
    }

    fn render_reading(morphemes: &[Morpheme], format: ReadingFormat) -> String {
        let mut out = String::new();
        for morpheme in morphemes {
            match usable_reading(morpheme) {
                Some(reading) => match format {
                    ReadingFormat::Hiragana => out.push_str(&to_hiragana(reading)),
                    ReadingFormat::Romaji => out.push_str(&katakana_to_romaji(reading)),
                    _ => out.push_str(reading),
                },
                None => out.push_str(&morpheme.surface),
            }
        }
        out
    }
}

impl Parser for JapaneseParser {
    fn name(&self) -> &'static str {
        "japanese"
    }

    /// Tokens are built 1:1 from the segmenter's output; the language
    /// configuration plays no role because the dictionary owns segmentation.
    fn parse(&self, text: &str, _language: &LanguageConfig) -> Result<Vec<ParsedToken>> {
        let morphemes = self.segmenter.segment(text)?;

        let mut tokens = Vec::with_capacity(morphemes.len());
        let mut sentence_number = 0;
        for (order, morpheme) in morphemes.into_iter().enumerate() {
            let is_word = CONTENT_WORD_POS
                .iter()
                .any(|pos| morpheme.part_of_speech.starts_with(pos));
            let is_end_of_sentence = SENTENCE_END_SURFACES.contains(&morpheme.surface.as_str());

            if is_word {
                tokens.push(ParsedToken::word(morpheme.surface, order, sentence_number));
            } else {
                tokens.push(ParsedToken::non_word(
                    morpheme.surface,
                    is_end_of_sentence,
                    order,
                    sentence_number,
                ));
            }
            if is_end_of_sentence {
                sentence_number += 1;
            }
        }

        Ok(tokens)
    }

    fn reading(&self, text: &str, format: ReadingFormat) -> Result<Option<String>> {
        // Hiragana-only text carries its own pronunciation.
        if is_all_hiragana(text) {
            return Ok(None);
        }

        let morphemes = self.segmenter.segment(text)?;
        match format {
            ReadingFormat::Furigana => Ok(Some(Self::render_furigana(&morphemes, false))),
            ReadingFormat::HtmlFurigana => Ok(Some(Self::render_furigana(&morphemes, true))),
            _ => {
                let rendered = Self::render_reading(&morphemes, format);
                if rendered == text {
                    // The reading adds no information over the input.
                    Ok(None)
                } else {
                    Ok(Some(rendered))
                }
            }
        }
    }

    fn lowercase(&self, text: &str) -> Result<String> {
        let morphemes = self.segmenter.segment(text)?;

        let mut out = String::new();
        for morpheme in &morphemes {
            match morpheme.reading.as_deref().filter(|r| !r.trim().is_empty()) {
                Some(reading) => out.push_str(&to_hiragana(reading)),
                None => out.push_str(&morpheme.surface),
            }
        }
        Ok(out)
    }
}

fn usable_reading(morpheme: &Morpheme) -> Option<&str> {
    morpheme
        .reading
        .as_deref()
        .filter(|r| !r.trim().is_empty() && !r.contains(MOJIBAKE))
}

fn has_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

fn is_japanese(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_kanji(c)
}

fn is_all_hiragana(text: &str) -> bool {
    text.chars().all(|c| !is_japanese(c) || is_hiragana(c))
}

/// Convert katakana to hiragana by the fixed code-point offset between the
/// two blocks; everything else passes through unchanged.
fn to_hiragana(katakana: &str) -> String {
    katakana
        .chars()
        .map(|c| {
            if is_katakana(c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
