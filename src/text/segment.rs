use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Words that end in a period without ending the sentence.
/// Compared lowercase with the trailing period removed.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "cf", "e.g", "i.e",
    "fig", "figs", "vol", "eq", "approx", "dept", "gen", "col", "lt", "sgt", "capt", "rev", "gov",
    "sen", "rep", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec",
];

/// Dotted initialisms such as "U.S" or "a.m", trailing period already removed.
fn initialism() -> &'static Regex {
    static INITIALISM: OnceLock<Regex> = OnceLock::new();
    INITIALISM.get_or_init(|| Regex::new(r"^(\p{L}\.)+\p{L}$").expect("static pattern is valid"))
}

/// Split `text` into sentences, in document order.
///
/// Boundaries come from the Unicode sentence rules (UAX #29). Lines inside a
/// paragraph are joined first, so hard-wrapped text is not split at every line
/// break; blank lines always end a sentence. A boundary found right after a
/// known abbreviation, a dotted initialism ("U.S. Army") or a single-letter
/// initial ("Dr. Smith", "J. Doe") is undone.
///
/// Text with content but no boundary at all comes back as one sentence.
/// The returned sentences are trimmed but not otherwise normalized; see
/// [`normalize`].
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in paragraphs(text) {
        split_paragraph(&paragraph, &mut out);
    }

    if out.is_empty() && !text.trim().is_empty() {
        out.push(text.trim().to_string());
    }
    out
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn normalize(sentence: &str) -> String {
    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }
    paragraphs
}

fn split_paragraph(paragraph: &str, out: &mut Vec<String>) {
    let mut pending = String::new();

    for fragment in paragraph.unicode_sentences() {
        pending.push_str(fragment);
        if ends_with_abbreviation(&pending) {
            continue;
        }
        push_trimmed(&mut pending, out);
    }
    push_trimmed(&mut pending, out);
}

fn push_trimmed(pending: &mut String, out: &mut Vec<String>) {
    let trimmed = pending.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    pending.clear();
}

fn ends_with_abbreviation(fragment: &str) -> bool {
    let Some(last) = fragment.split_whitespace().next_back() else {
        return false;
    };
    let Some(word) = last.strip_suffix('.') else {
        return false;
    };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase();
    }
    if initialism().is_match(word) {
        return true;
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}
