//! Sentence splitting for oversized paragraphs.
//!
//! The segmenter only drops to sentence level when a paragraph will not fit
//! into the current segment. The rule is deliberately simple: a sentence ends
//! at `.`, `!` or `?` followed by whitespace.
//!
//! ```text
//! "Eerst dit. Dan dat!  En nu?"
//!           ^         ^^
//!           split     split (the whole whitespace run is dropped)
//!
//! -> ["Eerst dit.", "Dan dat!", "En nu?"]
//! ```
//!
//! Abbreviations ("bijv. een") and decimals followed by a space will split
//! too. That is acceptable here: a sentence piece is only a packing unit, and
//! the pieces are rejoined with a single space inside a segment.

use std::sync::LazyLock;

use regex::Regex;

/// Sentence-final punctuation followed by a whitespace run.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("static regex"));

/// Split a paragraph into sentences.
///
/// Punctuation stays with the sentence it ends; the whitespace after it is
/// dropped. Text with no boundary comes back as a single piece.
///
/// ```rust
/// use lesstof::split_sentences;
///
/// assert_eq!(
///     split_sentences("Hallo wereld. Hoe gaat het? Goed."),
///     vec!["Hallo wereld.", "Hoe gaat het?", "Goed."],
/// );
/// assert_eq!(split_sentences("geen punt"), vec!["geen punt"]);
/// ```
#[must_use]
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(paragraph) {
        // The punctuation character is ASCII, so +1 is a char boundary.
        let end = m.start() + 1;
        sentences.push(&paragraph[start..end]);
        start = m.end();
    }

    if start < paragraph.len() || sentences.is_empty() {
        sentences.push(&paragraph[start..]);
    }

    sentences
}
