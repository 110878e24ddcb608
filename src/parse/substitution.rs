//! Character substitution applied to raw text before tokenization.
//!
//! Substitution rules arrive as a pipe-separated list of `from=to` pairs
//! (e.g. `’='|…=...` to normalize smart punctuation). Rules are applied as
//! literal string replacements in list order, each pass operating on the
//! previous pass's output, so a later rule can act on text produced by an
//! earlier rule.

use tracing::warn;

/// Apply the configured substitutions to `text`.
///
/// A `None` or blank configuration is the identity transform.
///
/// # Examples
///
/// ```
/// use lectio::parse::substitution;
///
/// assert_eq!(substitution::apply("a b c", Some("a=x|c=z")), "x b z");
/// assert_eq!(substitution::apply("hello", None), "hello");
/// ```
pub fn apply(text: &str, config: Option<&str>) -> String {
    let config = match config {
        Some(c) if !c.trim().is_empty() => c,
        _ => return text.to_string(),
    };

    let mut result = text.to_string();
    for (from, to) in parse_rules(config) {
        result = result.replace(&from, &to);
    }
    result
}

/// Parse a substitution configuration into an ordered list of `(from, to)`
/// pairs.
///
/// Entries are separated by `|`; each entry is split on its first `=`, so the
/// replacement may itself contain `=`. Entries without an `=` are skipped with
/// a warning rather than failing the whole configuration.
pub fn parse_rules(config: &str) -> Vec<(String, String)> {
    if config.trim().is_empty() {
        return Vec::new();
    }

    config
        .split('|')
        .filter_map(|entry| match entry.split_once('=') {
            Some((from, to)) => Some((from.to_string(), to.to_string())),
            None => {
                warn!("Invalid character substitution entry (missing '='): '{entry}'");
                None
            }
        })
        .collect()
}
