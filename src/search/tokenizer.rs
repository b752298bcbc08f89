use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Tokens shorter than this never enter the index; articles and short
/// connectors would otherwise match almost every query.
pub const MIN_TOKEN_LEN: usize = 3;

/// Lowercases, NFD-decomposes, drops combining diacritical marks, and
/// collapses whitespace runs. Idempotent.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits normalized text into runs of `[a-z0-9]`, keeping order and
/// duplicates, discarding tokens shorter than `MIN_TOKEN_LEN`.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = Regex::new(r"[a-z0-9]+").unwrap();
    re.find_iter(&normalize(text))
        .map(|m| m.as_str().to_string())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .collect()
}
