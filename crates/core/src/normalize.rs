//! Reflows raw model output into short paragraphs.
//!
//! The companion is asked to speak in flowing paragraphs, models still reach
//! for numbered lists and dense blocks of text. [`clean`] strips ordinal list
//! markers, normalizes blank lines and puts every sentence in its own
//! paragraph.
//!
//! Sentence detection is a plain punctuation heuristic: decimals followed by a
//! space, abbreviations like "Dr. " and ellipses split too.
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\s+").expect("list marker pattern is valid"));
static LINE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("line break pattern is valid"));
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?]) ").expect("sentence end pattern is valid"));

/// Normalizes a model reply for display. Total, never fails.
///
/// Not strictly idempotent: a sentence end followed by a space and a line
/// break gains four newlines on the first pass, a second pass collapses them
/// to two.
pub fn clean(raw: &str) -> String {
    let text = LIST_MARKER.replace_all(raw, "");
    let text = LINE_BREAKS.replace_all(&text, "\n\n");
    SENTENCE_END.replace_all(&text, "${1}\n\n").into_owned()
}
