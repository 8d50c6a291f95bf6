//! # lesstof
//!
//! Cleaning and segmentation of extracted course material ("lesstof") for
//! retrieval-style prompt assembly.
//!
//! ## The Problem
//!
//! Teachers upload chapters as PDF or DOCX. After text extraction, a chapter
//! is one long string full of layout debris, far too big to put in front of a
//! language model in one go. It has to be cut into segments that are:
//!
//! - small enough that a handful fit in a prompt
//! - large enough to carry a complete explanation
//! - cut where the author put a boundary, not mid-sentence
//!
//! ## The Pipeline
//!
//! ```text
//! raw text ──clean──► cleaned text ──segment──► [seg 0, seg 1, ...]
//!                                                   │
//!                                      ingest wraps each into a
//!                                      SegmentRecord { id, materialId, index, .. }
//! ```
//!
//! 1. [`clean`] normalizes line endings, tabs, no-break spaces, blank-line
//!    runs and space runs.
//! 2. [`TextSegmenter`] packs paragraphs greedily into a
//!    `min_len..=max_len` character band, falls back to sentences for
//!    paragraphs that do not fit, then merges short leftovers into their
//!    predecessor.
//! 3. [`ingest`] applies the length policy and produces storage-ready
//!    [`SegmentRecord`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use lesstof::{clean, Segmenter, TextSegmenter};
//!
//! let raw = "Les 1\r\n\r\nEen cel heeft een kern.\tDe kern bevat DNA.";
//! let text = clean(raw);
//!
//! let segments = TextSegmenter::default().segment(&text);
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].text, "Les 1\n\nEen cel heeft een kern. De kern bevat DNA.");
//!
//! // Or, with plain strings and explicit bounds:
//! let segments = lesstof::segment(&text, 500, 1500);
//! assert_eq!(segments.len(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - Total: no input makes cleaning or segmenting fail.
//! - Lossless: every non-whitespace character survives, in order.
//! - Deterministic: same input, same bounds, same segments.
//! - Segments exceed `max_len` only when a single sentence (or a paragraph
//!   following an already full segment) is larger than `max_len` on its own.

mod bounds;
mod clean;
mod error;
mod ingest;
mod segment;
mod segmenter;
mod sentence;

pub use bounds::SegmentBounds;
pub use clean::clean;
pub use error::{Error, Result};
pub use ingest::{ingest, IngestPolicy, IngestedText, SegmentRecord};
pub use segment::Segment;
pub use segmenter::{segment, Segmenter, TextSegmenter};
pub use sentence::split_sentences;
