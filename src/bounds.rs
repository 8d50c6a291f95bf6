//! Segment size band.
//!
//! ## Min and Max
//!
//! A single size limit forces a choice between fragments and walls of text.
//! Segments here are governed by a band instead:
//!
//! - `max_len`: packing stops before a segment would grow past this.
//! - `min_len`: a segment below this is "not done yet". The packer keeps
//!   filling it (dropping to sentence level if needed), and the merge pass
//!   folds short leftovers into the previous segment.
//!
//! ```text
//! min_len = 500, max_len = 1500
//!
//!   0 ........ 500 ................ 1500 ......
//!   |  too small |     in band       | overflow
//!   merge/fill      flush here         only for a single
//!                                      unsplittable unit
//! ```
//!
//! Both bounds count characters (Unicode scalar values), not bytes.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::{Error, Result};

/// Lower and upper character bounds for segment size.
///
/// # Examples
///
/// ```rust
/// use lesstof::SegmentBounds;
///
/// let bounds = SegmentBounds::default();
/// assert_eq!(bounds.min_len(), 500);
/// assert_eq!(bounds.max_len(), 1500);
///
/// let bounds = SegmentBounds::try_from(200..=800).unwrap();
/// assert_eq!(bounds.max_len(), 800);
///
/// assert!(SegmentBounds::new(800, 200).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct SegmentBounds {
    min_len: usize,
    max_len: usize,
}

impl SegmentBounds {
    /// Default lower bound, in characters.
    pub const DEFAULT_MIN_LEN: usize = 500;
    /// Default upper bound, in characters.
    pub const DEFAULT_MAX_LEN: usize = 1500;

    /// Create a validated size band.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] unless `0 < min_len < max_len`.
    pub fn new(min_len: usize, max_len: usize) -> Result<Self> {
        if min_len == 0 || min_len >= max_len {
            return Err(Error::InvalidBounds { min_len, max_len });
        }
        Ok(Self { min_len, max_len })
    }

    /// The size a segment should reach before it is flushed.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// The size packing will not exceed.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Where a segment of `len` characters sits relative to the band.
    ///
    /// - `Ordering::Less`: below `min_len`
    /// - `Ordering::Equal`: within `min_len..=max_len`
    /// - `Ordering::Greater`: above `max_len`
    #[must_use]
    pub fn fits(&self, len: usize) -> Ordering {
        if len < self.min_len {
            Ordering::Less
        } else if len > self.max_len {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Whether growing a `current`-length buffer by `additional` characters
    /// would pass `max_len`.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max_len
    }
}

impl Default for SegmentBounds {
    fn default() -> Self {
        Self {
            min_len: Self::DEFAULT_MIN_LEN,
            max_len: Self::DEFAULT_MAX_LEN,
        }
    }
}

impl TryFrom<RangeInclusive<usize>> for SegmentBounds {
    type Error = Error;

    fn try_from(range: RangeInclusive<usize>) -> Result<Self> {
        Self::new(*range.start(), *range.end())
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawBounds {
    min_len: usize,
    max_len: usize,
}

impl Default for RawBounds {
    fn default() -> Self {
        Self {
            min_len: SegmentBounds::DEFAULT_MIN_LEN,
            max_len: SegmentBounds::DEFAULT_MAX_LEN,
        }
    }
}

impl TryFrom<RawBounds> for SegmentBounds {
    type Error = Error;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Self::new(raw.min_len, raw.max_len)
    }
}
