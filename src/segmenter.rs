//! Two-pass segmentation of cleaned document text.
//!
//! ## Pass 1: Greedy Packing
//!
//! Paragraphs (split on blank lines) are packed into a buffer until the next
//! one would push it past `max_len`. What happens then depends on how full
//! the buffer is:
//!
//! ```text
//! buffer >= min_len          buffer < min_len
//! ----------------           ----------------
//! flush, start over          the paragraph is too big to take whole,
//! with the paragraph         so feed it in sentence by sentence,
//!                            flushing whenever the next sentence
//!                            would overflow
//! ```
//!
//! Paragraph boundaries are preferred; sentences are the fallback unit. A
//! single unit larger than `max_len` is never cut, so it becomes an
//! oversized segment of its own.
//!
//! ## Pass 2: Tail Merge
//!
//! Packing can leave short leftovers, e.g. a one-line paragraph that missed
//! the previous segment by the width of a blank line. Each segment shorter
//! than `min_len` is appended to the previous segment (joined by `\n`) if the
//! result stays within `max_len`.
//!
//! ```text
//! min_len = 500, max_len = 1500
//!
//! pass 1: [1419] [80]          1419 + 2 + 80 = 1501, flushed
//! pass 2: [1419 + 1 + 80 = 1500]
//! ```

use crate::{Segment, SegmentBounds};

const PARAGRAPH_SEP: &str = "\n\n";
const SENTENCE_SEP: &str = " ";
const MERGE_SEP: &str = "\n";

/// A text segmentation strategy.
///
/// ```rust
/// use lesstof::{Segment, Segmenter, TextSegmenter};
///
/// fn segment_document(segmenter: &dyn Segmenter, text: &str) -> Vec<Segment> {
///     segmenter.segment(text)
/// }
///
/// let segments = segment_document(&TextSegmenter::default(), "Korte tekst.");
/// assert_eq!(segments.len(), 1);
/// ```
pub trait Segmenter: Send + Sync {
    /// Split cleaned text into segments, in document order.
    fn segment(&self, text: &str) -> Vec<Segment>;

    /// Estimate the number of segments for a text of `text_len` characters.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_segments(&self, text_len: usize) -> usize {
        (text_len / 1000).max(1)
    }
}

/// Paragraph-first segmenter with sentence fallback and tail merging.
///
/// ## Example
///
/// ```rust
/// use lesstof::{SegmentBounds, Segmenter, TextSegmenter};
///
/// let segmenter = TextSegmenter::new(SegmentBounds::new(10, 40).unwrap());
/// let text = "Eerste alinea hier.\n\nTweede alinea hier.\n\nDerde.";
/// let segments = segmenter.segment(text);
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].text, "Eerste alinea hier.\n\nTweede alinea hier.");
/// assert_eq!(segments[1].text, "Derde.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSegmenter {
    bounds: SegmentBounds,
}

impl TextSegmenter {
    /// Create a segmenter for the given size band.
    #[must_use]
    pub fn new(bounds: SegmentBounds) -> Self {
        Self { bounds }
    }

    /// The size band this segmenter packs to.
    #[must_use]
    pub fn bounds(&self) -> SegmentBounds {
        self.bounds
    }

    /// Run both passes and return the raw segment strings.
    #[must_use]
    pub fn segment_strings(&self, text: &str) -> Vec<String> {
        let paragraphs = split_paragraphs(text);
        let packed = self.pack(&paragraphs, self.estimate_segments(char_len(text)));
        let packed_count = packed.len();
        let merged = self.merge_short(packed);

        tracing::debug!(
            paragraphs = paragraphs.len(),
            packed = packed_count,
            segments = merged.len(),
            min_len = self.bounds.min_len(),
            max_len = self.bounds.max_len(),
            "segmented text"
        );

        merged.into_iter().map(|piece| piece.text).collect()
    }

    /// Pass 1: greedy paragraph packing with sentence fallback.
    fn pack(&self, paragraphs: &[&str], capacity: usize) -> Vec<Piece> {
        let mut out = Vec::with_capacity(capacity);
        let mut buf = Piece::default();

        for &paragraph in paragraphs {
            let para_len = char_len(paragraph);

            if !self.bounds.would_overflow(buf.joined_len(PARAGRAPH_SEP), para_len) {
                buf.push(PARAGRAPH_SEP, paragraph, para_len);
            } else if buf.len >= self.bounds.min_len() {
                out.push(std::mem::take(&mut buf));
                buf.push(PARAGRAPH_SEP, paragraph, para_len);
            } else {
                for sentence in crate::split_sentences(paragraph) {
                    let sentence_len = char_len(sentence);
                    if self
                        .bounds
                        .would_overflow(buf.joined_len(SENTENCE_SEP), sentence_len)
                    {
                        buf.flush_into(&mut out);
                    }
                    buf.push(SENTENCE_SEP, sentence, sentence_len);
                }
            }
        }

        buf.flush_into(&mut out);
        out
    }

    /// Pass 2: fold short segments into their predecessor where they fit.
    fn merge_short(&self, packed: Vec<Piece>) -> Vec<Piece> {
        let mut merged: Vec<Piece> = Vec::with_capacity(packed.len());

        for piece in packed {
            if piece.len < self.bounds.min_len() {
                if let Some(prev) = merged.last_mut() {
                    if !self
                        .bounds
                        .would_overflow(prev.joined_len(MERGE_SEP), piece.len)
                    {
                        prev.push(MERGE_SEP, &piece.text, piece.len);
                        continue;
                    }
                }
            }
            merged.push(piece);
        }

        merged
    }
}

impl Segmenter for TextSegmenter {
    fn segment(&self, text: &str) -> Vec<Segment> {
        self.segment_strings(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Segment::new(text, index))
            .collect()
    }

    fn estimate_segments(&self, text_len: usize) -> usize {
        // Segments tend to land between the two bounds.
        let typical = (self.bounds.min_len() + self.bounds.max_len()) / 2;
        (text_len / typical).max(1)
    }
}

/// Segment `text` into pieces of roughly `min_len..=max_len` characters.
///
/// Empty or whitespace-only text yields no segments.
///
/// ```rust
/// let segments = lesstof::segment("Short para one.\n\nShort para two.", 500, 1500);
/// assert_eq!(segments, vec!["Short para one.\n\nShort para two."]);
///
/// assert!(lesstof::segment("   \n\n  ", 500, 1500).is_empty());
/// ```
///
/// # Panics
///
/// Panics unless `0 < min_len < max_len`.
#[must_use]
pub fn segment(text: &str, min_len: usize, max_len: usize) -> Vec<String> {
    let bounds = match SegmentBounds::new(min_len, max_len) {
        Ok(bounds) => bounds,
        Err(err) => panic!("{err}"),
    };
    TextSegmenter::new(bounds).segment_strings(text)
}

/// A segment under construction, with its character count kept alongside
/// so packing stays linear in the input.
#[derive(Debug, Default)]
struct Piece {
    text: String,
    len: usize,
}

impl Piece {
    /// Length after appending `sep` (only if non-empty).
    fn joined_len(&self, sep: &str) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.len + sep.len()
        }
    }

    fn push(&mut self, sep: &str, part: &str, part_len: usize) {
        if !self.text.is_empty() {
            self.text.push_str(sep);
            self.len += sep.len();
        }
        self.text.push_str(part);
        self.len += part_len;
    }

    fn flush_into(&mut self, out: &mut Vec<Piece>) {
        if !self.text.trim().is_empty() {
            out.push(std::mem::take(self));
        } else {
            *self = Piece::default();
        }
    }
}

/// Split on blank lines, trimming and dropping empty paragraphs.
fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEP)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
