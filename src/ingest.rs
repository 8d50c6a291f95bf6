//! Ingestion: from extracted text to storage-ready segment records.
//!
//! The segmenter itself is total; deciding which texts are worth storing is a
//! policy question. [`IngestPolicy`] holds that policy:
//!
//! | Check | Default | Rejection |
//! |-------|---------|-----------|
//! | cleaned text empty or shorter than `min_text_len` | 20 chars | [`Error::TextTooShort`] |
//! | cleaned text longer than `max_text_len` | 500 000 chars | [`Error::TextTooLong`] |
//!
//! Accepted text is segmented with the policy's [`SegmentBounds`] and each
//! segment becomes a [`SegmentRecord`] with a fresh UUID, ready for the
//! storage layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{clean, Error, Result, Segment, SegmentBounds, Segmenter, TextSegmenter};

/// Limits applied to a document before and during segmentation.
///
/// ```rust
/// use lesstof::IngestPolicy;
///
/// let policy = IngestPolicy::from_toml_str(
///     r#"
///     max_text_len = 100000
///
///     [bounds]
///     min_len = 400
///     max_len = 1200
///     "#,
/// )
/// .unwrap();
/// assert_eq!(policy.min_text_len, 20);
/// assert_eq!(policy.bounds.max_len(), 1200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IngestPolicy {
    /// Size band for segments.
    pub bounds: SegmentBounds,
    /// Cleaned texts shorter than this are rejected.
    pub min_text_len: usize,
    /// Cleaned texts longer than this are rejected.
    pub max_text_len: usize,
}

impl IngestPolicy {
    /// Default minimum text length, in characters.
    pub const DEFAULT_MIN_TEXT_LEN: usize = 20;
    /// Default maximum text length, in characters.
    pub const DEFAULT_MAX_TEXT_LEN: usize = 500_000;

    /// Use a different segment size band.
    #[must_use]
    pub fn with_bounds(self, bounds: SegmentBounds) -> Self {
        Self { bounds, ..self }
    }

    /// Parse a policy from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed TOML, invalid bounds, or
    /// `min_text_len > max_text_len`.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let policy: Self = toml::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check that the text limits are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `min_text_len > max_text_len`.
    pub fn validate(&self) -> Result<()> {
        if self.min_text_len > self.max_text_len {
            return Err(Error::Config(format!(
                "min_text_len {} exceeds max_text_len {}",
                self.min_text_len, self.max_text_len
            )));
        }
        Ok(())
    }

    /// Check a cleaned text against the length limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TextTooShort`] or [`Error::TextTooLong`].
    pub fn check(&self, cleaned: &str) -> Result<usize> {
        let len = cleaned.chars().count();
        if len == 0 || len < self.min_text_len {
            return Err(Error::TextTooShort {
                len,
                min: self.min_text_len,
            });
        }
        if len > self.max_text_len {
            return Err(Error::TextTooLong {
                len,
                max: self.max_text_len,
            });
        }
        Ok(len)
    }
}

impl Default for IngestPolicy {
    fn default() -> Self {
        Self {
            bounds: SegmentBounds::default(),
            min_text_len: Self::DEFAULT_MIN_TEXT_LEN,
            max_text_len: Self::DEFAULT_MAX_TEXT_LEN,
        }
    }
}

/// A segment wrapped for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    /// Generated identifier.
    pub id: Uuid,
    /// The material (uploaded document) this segment belongs to.
    pub material_id: String,
    /// Position within the material.
    pub index: usize,
    /// Segment text.
    pub text: String,
    /// Length in characters.
    pub length: usize,
    /// Estimated LLM tokens.
    pub tokens: usize,
}

impl SegmentRecord {
    /// Wrap a segment, generating a new id.
    #[must_use]
    pub fn new(material_id: impl Into<String>, segment: &Segment) -> Self {
        Self {
            id: Uuid::new_v4(),
            material_id: material_id.into(),
            index: segment.index,
            text: segment.text.clone(),
            length: segment.len(),
            tokens: segment.estimated_tokens(),
        }
    }
}

/// The outcome of ingesting one material.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedText {
    /// The material the records belong to.
    pub material_id: String,
    /// Character count of the cleaned text.
    pub text_len: usize,
    /// One record per segment, in document order.
    pub segments: Vec<SegmentRecord>,
}

impl IngestedText {
    /// Number of segments produced.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Clean, validate and segment `raw` for the material `material_id`.
///
/// ```rust
/// use lesstof::{ingest, IngestPolicy};
///
/// let raw = "Hoofdstuk 1\r\n\r\nDe cel is de kleinste eenheid van leven.";
/// let ingested = ingest("bio-h1", raw, &IngestPolicy::default()).unwrap();
///
/// assert_eq!(ingested.segment_count(), 1);
/// assert_eq!(ingested.segments[0].material_id, "bio-h1");
/// assert!(ingest("bio-h1", "te kort", &IngestPolicy::default()).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::TextTooShort`] or [`Error::TextTooLong`] when the cleaned
/// text falls outside the policy limits.
pub fn ingest(material_id: &str, raw: &str, policy: &IngestPolicy) -> Result<IngestedText> {
    let cleaned = clean(raw);
    let text_len = match policy.check(&cleaned) {
        Ok(len) => len,
        Err(err) => {
            tracing::warn!(material_id, error = %err, "rejected material text");
            return Err(err);
        }
    };

    let segments: Vec<SegmentRecord> = TextSegmenter::new(policy.bounds)
        .segment(&cleaned)
        .iter()
        .map(|segment| SegmentRecord::new(material_id, segment))
        .collect();

    tracing::info!(
        material_id,
        text_len,
        segments = segments.len(),
        "ingested material"
    );

    Ok(IngestedText {
        material_id: material_id.to_string(),
        text_len,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(words: usize) -> String {
        let mut text = "Dit is een zin over fotosynthese. ".repeat(words);
        text.truncate(text.trim_end().len());
        text
    }

    #[test]
    fn test_rejects_short_text() {
        let err = ingest("m1", "  \t kort \r\n", &IngestPolicy::default()).unwrap_err();
        assert!(matches!(err, Error::TextTooShort { len: 4, min: 20 }));
    }

    #[test]
    fn test_rejects_empty_text() {
        let err = ingest("m1", "\n\n\n", &IngestPolicy::default()).unwrap_err();
        assert!(matches!(err, Error::TextTooShort { len: 0, .. }));
    }

    #[test]
    fn test_rejects_long_text() {
        let policy = IngestPolicy {
            max_text_len: 100,
            ..IngestPolicy::default()
        };
        let err = ingest("m1", &"a".repeat(101), &policy).unwrap_err();
        assert!(matches!(err, Error::TextTooLong { len: 101, max: 100 }));
    }

    #[test]
    fn test_limits_apply_to_cleaned_text() {
        // 18 visible chars plus padding that cleaning removes.
        let raw = format!("{}\t\t\t\t", "b".repeat(18));
        assert!(ingest("m1", &raw, &IngestPolicy::default()).is_err());
    }

    #[test]
    fn test_records_in_order() {
        let text = [paragraph(20), paragraph(20), paragraph(20)].join("\n\n");
        let ingested = ingest("mat-7", &text, &IngestPolicy::default()).unwrap();

        assert!(ingested.segment_count() > 1);
        for (i, record) in ingested.segments.iter().enumerate() {
            assert_eq!(record.index, i);
            assert_eq!(record.material_id, "mat-7");
            assert_eq!(record.length, record.text.chars().count());
        }
    }

    #[test]
    fn test_record_ids_unique() {
        let text = [paragraph(30), paragraph(30)].join("\n\n");
        let ingested = ingest("m", &text, &IngestPolicy::default()).unwrap();
        let ids: std::collections::HashSet<_> = ingested.segments.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), ingested.segment_count());
    }

    #[test]
    fn test_record_json_shape() {
        let record = SegmentRecord::new("mat-1", &Segment::new("tekst", 2));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["materialId"], "mat-1");
        assert_eq!(json["index"], 2);
        assert_eq!(json["length"], 5);
        assert_eq!(json["tokens"], 10);
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_policy_defaults_from_empty_toml() {
        let policy = IngestPolicy::from_toml_str("").unwrap();
        assert_eq!(policy, IngestPolicy::default());
    }

    #[test]
    fn test_policy_rejects_bad_bounds() {
        let result = IngestPolicy::from_toml_str("[bounds]\nmin_len = 0\nmax_len = 10");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_policy_rejects_inverted_text_limits() {
        let result = IngestPolicy::from_toml_str("min_text_len = 10\nmax_text_len = 5");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
