use regex::Regex;
use std::sync::OnceLock;

/// A token is a maximal run of letters (ASCII plus the extended Latin
/// diacritics used by the reference corpora), optionally containing one
/// internal hyphen joining two letter-runs. Everything else separates.
const WORD_PATTERN: &str = r"[A-Za-zĂÂÎȘȚăâîșț]+(?:-[A-Za-zĂÂÎȘȚăâîșț]+)?";

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WORD_PATTERN).expect("word pattern is valid"))
}

/// Splits raw text into ordered, lower-cased word tokens.
///
/// Order and exact token content are significant to every downstream
/// computation; duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
