use std::sync::OnceLock;

use regex::Regex;

use super::stopwords::Stopwords;

/// Anything that is not a letter (with its combining marks), digit, hyphen,
/// apostrophe or whitespace.
fn disallowed() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED.get_or_init(|| Regex::new(r"[^\p{L}\p{M}\p{N}\s'-]+").expect("static pattern is valid"))
}

/// Break a sentence into lowercase word tokens.
///
/// Characters other than letters, combining marks, digits, `-` and `'` are
/// deleted (not replaced), then the text is split on whitespace. With
/// `stopwords`, any token in the set is dropped. Order and duplicates are preserved.
pub fn tokens(text: &str, stopwords: Option<&Stopwords>) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = disallowed().replace_all(&lowered, "");

    cleaned
        .split_whitespace()
        .filter(|token| stopwords.map_or(true, |stop| !stop.contains(token)))
        .map(str::to_string)
        .collect()
}
