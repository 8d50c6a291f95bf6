//! Error types for lesstof.

/// Errors that can occur while configuring or running ingestion.
///
/// Cleaning and segmenting themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Segment bounds must satisfy `0 < min_len < max_len`.
    #[error("invalid segment bounds: min_len {min_len}, max_len {max_len} (need 0 < min_len < max_len)")]
    InvalidBounds {
        /// The lower bound that was requested.
        min_len: usize,
        /// The upper bound that was requested.
        max_len: usize,
    },

    /// Cleaned text is empty or below the policy minimum.
    #[error("text too short: {len} chars (minimum {min})")]
    TextTooShort {
        /// Character count of the cleaned text.
        len: usize,
        /// The policy minimum.
        min: usize,
    },

    /// Cleaned text exceeds the policy maximum.
    #[error("text too long: {len} chars (maximum {max})")]
    TextTooLong {
        /// Character count of the cleaned text.
        len: usize,
        /// The policy maximum.
        max: usize,
    },

    /// Ingestion policy could not be parsed.
    #[error("invalid ingest policy: {0}")]
    Config(String),
}

/// Result type for lesstof operations.
pub type Result<T> = std::result::Result<T, Error>;
