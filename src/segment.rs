//! The Segment type: one packed unit of document text.

/// A segment of cleaned document text.
///
/// Unlike a plain substring, a segment is reassembled: paragraphs inside it
/// are joined by a blank line, sentence pieces by a single space, and a short
/// segment merged into its predecessor by a single newline. What is preserved
/// is every non-whitespace character, in order.
///
/// ## Lengths Are Characters
///
/// `len()` counts Unicode scalar values, matching how
/// [`SegmentBounds`](crate::SegmentBounds) is expressed:
///
/// ```rust
/// use lesstof::Segment;
///
/// let segment = Segment::new("Één zin.", 0);
/// assert_eq!(segment.len(), 8);
/// assert_eq!(segment.text.len(), 10); // bytes
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The segment text.
    pub text: String,
    /// Zero-based position of this segment in the document.
    pub index: usize,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// The length of this segment in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this segment is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Rough LLM token count for prompt budgeting: a quarter of the
    /// character count, never below 10.
    #[must_use]
    pub fn estimated_tokens(&self) -> usize {
        ((self.len() + 2) / 4).max(10)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment {{ index: {}, len: {} }}",
            self.index,
            self.len()
        )
    }
}
