//! Morphological segmentation collaborator for Japanese.
//!
//! The engine's own logic (content-word classification, furigana rendering,
//! transliteration) is written against the [`MorphologicalSegmenter`] trait so
//! it stays unit-testable without a dictionary; [`LinderaSegmenter`] is the
//! production implementation.

use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::error::{LectioError, Result};

/// IPADIC detail layout: POS1..POS4, conjugation type/form, base form,
/// reading, pronunciation.
const READING_INDEX: usize = 7;

/// A single span produced by morphological analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Morpheme {
    /// The surface form as it appears in the text.
    pub surface: String,

    /// The primary part-of-speech label (e.g. 名詞, 動詞, 記号).
    pub part_of_speech: String,

    /// Katakana reading, when the dictionary supplies one.
    pub reading: Option<String>,
}

impl Morpheme {
    /// Create a morpheme with a reading.
    pub fn new<S: Into<String>>(surface: S, part_of_speech: S, reading: Option<S>) -> Self {
        Morpheme {
            surface: surface.into(),
            part_of_speech: part_of_speech.into(),
            reading: reading.map(Into::into),
        }
    }
}

/// Trait for morphological segmenters that split Japanese text into morphemes.
///
/// Failures from the underlying analyzer propagate unchanged; the engine
/// never masks or retries them.
pub trait MorphologicalSegmenter: Send + Sync {
    /// Segment the given text into an ordered sequence of morphemes.
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>>;

    /// Get the name of this segmenter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Morphological segmenter backed by Lindera.
pub struct LinderaSegmenter {
    inner: Segmenter,
}

impl LinderaSegmenter {
    /// Create a new Lindera segmenter.
    pub fn new(mode_str: &str, dict_uri: &str, user_dict_uri: Option<&str>) -> Result<Self> {
        let mode = Mode::from_str(mode_str)
            .map_err(|e| LectioError::segmenter(format!("Invalid mode '{mode_str}': {e}")))?;
        let dict = load_dictionary(dict_uri)
            .map_err(|e| LectioError::segmenter(format!("Failed to load dictionary: {e}")))?;
        let metadata = &dict.metadata;
        let user_dict = match user_dict_uri {
            Some(uri) => Some(load_user_dictionary(uri, metadata).map_err(|e| {
                LectioError::segmenter(format!("Failed to load user dictionary: {e}"))
            })?),
            None => None,
        };
        let inner = Segmenter::new(mode, dict, user_dict);

        Ok(Self { inner })
    }

    /// Create a segmenter over the embedded IPADIC dictionary, whose POS
    /// labels and katakana readings the rest of the Japanese parser expects.
    pub fn ipadic() -> Result<Self> {
        Self::new("normal", "embedded://ipadic", None)
    }
}

impl MorphologicalSegmenter for LinderaSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>> {
        let mut morphemes = Vec::new();

        for mut token in self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| LectioError::segmenter(format!("Failed to segment text: {e}")))?
        {
            let details = token.details();
            let part_of_speech = details.first().map(|d| d.to_string()).unwrap_or_default();
            // IPADIC reports missing fields as "*"; unknown words carry no
            // reading at all.
            let reading = details
                .get(READING_INDEX)
                .map(|d| d.to_string())
                .filter(|r| r.as_str() != "*");

            morphemes.push(Morpheme {
                surface: token.surface.to_string(),
                part_of_speech,
                reading,
            });
        }

        Ok(morphemes)
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_japanese() {
        let segmenter = LinderaSegmenter::ipadic().unwrap();
        let morphemes = segmenter.segment("日本語を勉強する。").unwrap();

        let surfaces: Vec<_> = morphemes.iter().map(|m| m.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["日本語", "を", "勉強", "する", "。"]);

        assert_eq!(morphemes[0].part_of_speech, "名詞");
        assert_eq!(morphemes[0].reading.as_deref(), Some("ニホンゴ"));
        assert_eq!(morphemes[1].part_of_speech, "助詞");
        assert_eq!(morphemes[4].part_of_speech, "記号");
    }

    #[test]
    fn test_segment_empty() {
        let segmenter = LinderaSegmenter::ipadic().unwrap();
        assert!(segmenter.segment("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_mode_is_an_error() {
        assert!(LinderaSegmenter::new("bogus", "embedded://ipadic", None).is_err());
    }

    #[test]
    fn test_segmenter_name() {
        let segmenter = LinderaSegmenter::ipadic().unwrap();
        assert_eq!(segmenter.name(), "lindera");
    }
}
