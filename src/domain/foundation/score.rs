//! Score value object constrained to 0-100.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A compliance score in the closed range [0, 100].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Creates a score, clamping to 100.
    pub fn new(value: u8) -> Self {
        Score(value.min(100))
    }

    /// Creates a score, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range("score", 0, 100, value as i32));
        }
        Ok(Score(value))
    }

    /// Creates a score from a signed running total, clamping to [0, 100].
    ///
    /// This is the single clamp point of the scoring algorithm: penalties
    /// are accumulated as signed arithmetic and may drive the raw total
    /// below zero before this conversion.
    pub fn from_raw(raw: i32) -> Self {
        Score(raw.clamp(0, 100) as u8)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
