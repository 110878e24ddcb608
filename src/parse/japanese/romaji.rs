//! Katakana to romaji transliteration.
//!
//! The scan is mora-oriented: at each position a two-character digraph (a
//! palatalized or foreign-sound mora such as `キャ` or `ファ`) is preferred
//! over a single-character match. Two marks get special handling:
//!
//! - the sokuon `ッ` doubles the first consonant letter of the following
//!   mora's romanization and is never emitted itself;
//! - the chōonpu `ー` repeats the previously emitted character.
//!
//! Any code point absent from the tables passes through unchanged.

use std::sync::LazyLock;

use ahash::AHashMap;

const SOKUON: char = 'ッ';
const CHOONPU: char = 'ー';

const DIGRAPHS: &[(&str, &str)] = &[
    ("キャ", "kya"),
    ("キュ", "kyu"),
    ("キョ", "kyo"),
    ("シャ", "sha"),
    ("シュ", "shu"),
    ("ショ", "sho"),
    ("シェ", "she"),
    ("チャ", "cha"),
    ("チュ", "chu"),
    ("チョ", "cho"),
    ("チェ", "che"),
    ("ニャ", "nya"),
    ("ニュ", "nyu"),
    ("ニョ", "nyo"),
    ("ヒャ", "hya"),
    ("ヒュ", "hyu"),
    ("ヒョ", "hyo"),
    ("ミャ", "mya"),
    ("ミュ", "myu"),
    ("ミョ", "myo"),
    ("リャ", "rya"),
    ("リュ", "ryu"),
    ("リョ", "ryo"),
    ("ギャ", "gya"),
    ("ギュ", "gyu"),
    ("ギョ", "gyo"),
    ("ジャ", "ja"),
    ("ジュ", "ju"),
    ("ジョ", "jo"),
    ("ジェ", "je"),
    ("ビャ", "bya"),
    ("ビュ", "byu"),
    ("ビョ", "byo"),
    ("ピャ", "pya"),
    ("ピュ", "pyu"),
    ("ピョ", "pyo"),
    ("ファ", "fa"),
    ("フィ", "fi"),
    ("フェ", "fe"),
    ("フォ", "fo"),
    ("ウィ", "wi"),
    ("ウェ", "we"),
    ("ウォ", "wo"),
    ("ティ", "ti"),
    ("ディ", "di"),
    ("ヴァ", "va"),
    ("ヴィ", "vi"),
    ("ヴェ", "ve"),
    ("ヴォ", "vo"),
];

const MONOGRAPHS: &[(char, &str)] = &[
    ('ア', "a"),
    ('イ', "i"),
    ('ウ', "u"),
    ('エ', "e"),
    ('オ', "o"),
    ('カ', "ka"),
    ('キ', "ki"),
    ('ク', "ku"),
    ('ケ', "ke"),
    ('コ', "ko"),
    ('サ', "sa"),
    ('シ', "shi"),
    ('ス', "su"),
    ('セ', "se"),
    ('ソ', "so"),
    ('タ', "ta"),
    ('チ', "chi"),
    ('ツ', "tsu"),
    ('テ', "te"),
    ('ト', "to"),
    ('ナ', "na"),
    ('ニ', "ni"),
    ('ヌ', "nu"),
    ('ネ', "ne"),
    ('ノ', "no"),
    ('ハ', "ha"),
    ('ヒ', "hi"),
    ('フ', "fu"),
    ('ヘ', "he"),
    ('ホ', "ho"),
    ('マ', "ma"),
    ('ミ', "mi"),
    ('ム', "mu"),
    ('メ', "me"),
    ('モ', "mo"),
    ('ヤ', "ya"),
    ('ユ', "yu"),
    ('ヨ', "yo"),
    ('ラ', "ra"),
    ('リ', "ri"),
    ('ル', "ru"),
    ('レ', "re"),
    ('ロ', "ro"),
    ('ワ', "wa"),
    ('ヲ', "wo"),
    ('ン', "n"),
    ('ガ', "ga"),
    ('ギ', "gi"),
    ('グ', "gu"),
    ('ゲ', "ge"),
    ('ゴ', "go"),
    ('ザ', "za"),
    ('ジ', "ji"),
    ('ズ', "zu"),
    ('ゼ', "ze"),
    ('ゾ', "zo"),
    ('ダ', "da"),
    ('ヂ', "ji"),
    ('ヅ', "zu"),
    ('デ', "de"),
    ('ド', "do"),
    ('バ', "ba"),
    ('ビ', "bi"),
    ('ブ', "bu"),
    ('ベ', "be"),
    ('ボ', "bo"),
    ('パ', "pa"),
    ('ピ', "pi"),
    ('プ', "pu"),
    ('ペ', "pe"),
    ('ポ', "po"),
    ('ヴ', "vu"),
    ('ァ', "a"),
    ('ィ', "i"),
    ('ゥ', "u"),
    ('ェ', "e"),
    ('ォ', "o"),
    ('ャ', "ya"),
    ('ュ', "yu"),
    ('ョ', "yo"),
];

static DIGRAPH_MAP: LazyLock<AHashMap<(char, char), &'static str>> = LazyLock::new(|| {
    DIGRAPHS
        .iter()
        .map(|(kana, romaji)| {
            let mut chars = kana.chars();
            let first = chars.next().expect("digraph has two characters");
            let second = chars.next().expect("digraph has two characters");
            ((first, second), *romaji)
        })
        .collect()
});

static MONOGRAPH_MAP: LazyLock<AHashMap<char, &'static str>> =
    LazyLock::new(|| MONOGRAPHS.iter().copied().collect());

/// Romanization of the mora starting at `chars[i]`, with the number of
/// characters it consumes. Digraphs win over single characters.
fn mora_at(chars: &[char], i: usize) -> Option<(&'static str, usize)> {
    if i + 1 < chars.len() {
        if let Some(&romaji) = DIGRAPH_MAP.get(&(chars[i], chars[i + 1])) {
            return Some((romaji, 2));
        }
    }
    chars
        .get(i)
        .and_then(|c| MONOGRAPH_MAP.get(c))
        .map(|&romaji| (romaji, 1))
}

/// Transliterate katakana to romaji.
///
/// # Examples
///
/// ```
/// use lectio::parse::japanese::romaji::katakana_to_romaji;
///
/// assert_eq!(katakana_to_romaji("ニホンゴ"), "nihongo");
/// assert_eq!(katakana_to_romaji("キャベツ"), "kyabetsu");
/// ```
pub fn katakana_to_romaji(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == SOKUON {
            if let Some((next_romaji, _)) = mora_at(&chars, i + 1) {
                if let Some(first) = next_romaji.chars().next() {
                    if !matches!(first, 'a' | 'e' | 'i' | 'o' | 'u') {
                        out.push(first);
                    }
                }
            }
            i += 1;
        } else if c == CHOONPU {
            match out.chars().last() {
                Some(prev) => out.push(prev),
                None => out.push(c),
            }
            i += 1;
        } else if let Some((romaji, consumed)) = mora_at(&chars, i) {
            out.push_str(romaji);
            i += consumed;
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_moras() {
        assert_eq!(katakana_to_romaji("ニホンゴ"), "nihongo");
        assert_eq!(katakana_to_romaji("サクラ"), "sakura");
    }

    #[test]
    fn test_digraphs_win_over_single_characters() {
        assert_eq!(katakana_to_romaji("キャ"), "kya");
        assert_eq!(katakana_to_romaji("シュ"), "shu");
        assert_eq!(katakana_to_romaji("チョ"), "cho");
        assert_eq!(katakana_to_romaji("ジェ"), "je");
        // Without the digraph the small kana stands alone.
        assert_eq!(katakana_to_romaji("キ"), "ki");
    }

    #[test]
    fn test_sokuon_doubles_following_consonant() {
        assert_eq!(katakana_to_romaji("ッカ"), "kka");
        assert_eq!(katakana_to_romaji("ベッド"), "beddo");
        assert_eq!(katakana_to_romaji("ロケット"), "roketto");
        // Digraph after the sokuon doubles the digraph's first letter.
        assert_eq!(katakana_to_romaji("マッチャ"), "maccha");
    }

    #[test]
    fn test_sokuon_is_silent_without_a_following_consonant() {
        assert_eq!(katakana_to_romaji("ッ"), "");
        assert_eq!(katakana_to_romaji("ッアト"), "ato");
    }

    #[test]
    fn test_choonpu_repeats_previous_character() {
        assert_eq!(katakana_to_romaji("コー"), "koo");
        assert_eq!(katakana_to_romaji("コーヒー"), "koohii");
        assert_eq!(katakana_to_romaji("チョコレート"), "chokoreeto");
    }

    #[test]
    fn test_choonpu_with_nothing_before_passes_through() {
        assert_eq!(katakana_to_romaji("ー"), "ー");
    }

    #[test]
    fn test_untabled_characters_pass_through() {
        assert_eq!(katakana_to_romaji("abc"), "abc");
        assert_eq!(katakana_to_romaji("ニホン語"), "nihon語");
        assert_eq!(katakana_to_romaji("カタカナ、デス"), "katakana、desu");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(katakana_to_romaji(""), "");
    }
}
