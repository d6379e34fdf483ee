//! Severity value object for gaps and recommendation priorities.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rating;

/// Severity of a detected gap. Doubles as recommendation priority, which is
/// inherited from the originating gap's severity.
///
/// Ordering: `Critical > High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Score penalty applied once per gap of this severity.
    pub fn penalty(&self) -> i32 {
        match self {
            Severity::Critical => 30,
            Severity::High => 20,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }

    /// Sort weight, highest severity first.
    pub fn weight(&self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    /// One band more severe, capped at `Critical`.
    pub fn elevated(&self) -> Severity {
        match self {
            Severity::Critical | Severity::High => Severity::Critical,
            Severity::Medium => Severity::High,
            Severity::Low => Severity::Medium,
        }
    }

    /// Scales a base severity by the owning characteristic's rating.
    ///
    /// A critical-rated characteristic elevates a structural finding by one
    /// band; other ratings leave the base severity unchanged.
    pub fn scaled_by(&self, rating: Rating) -> Severity {
        match rating {
            Rating::Critical => self.elevated(),
            _ => *self,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Marker used in the markdown report rendering.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Critical => "[!!]",
            Severity::High => "[! ]",
            Severity::Medium => "[~ ]",
            Severity::Low => "[. ]",
        }
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
