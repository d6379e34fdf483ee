//! Compliance status bands derived from score thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Score;

/// Compliance status of one characteristic.
///
/// # Bands
/// - `>= 90` compliant
/// - `70..=89` mostly compliant
/// - `50..=69` partially compliant
/// - `< 50` non compliant
/// - `NotAnalyzed` when no analyzer ran (custom characteristic with no
///   registered rules, or a degraded pipeline)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    MostlyCompliant,
    PartiallyCompliant,
    NonCompliant,
    NotAnalyzed,
}

impl ComplianceStatus {
    /// Derives the status band from a score.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            90..=100 => ComplianceStatus::Compliant,
            70..=89 => ComplianceStatus::MostlyCompliant,
            50..=69 => ComplianceStatus::PartiallyCompliant,
            _ => ComplianceStatus::NonCompliant,
        }
    }

    /// Returns true for statuses that carry a score and count toward the
    /// overall aggregation.
    pub fn is_analyzed(&self) -> bool {
        !matches!(self, ComplianceStatus::NotAnalyzed)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::MostlyCompliant => "Mostly Compliant",
            ComplianceStatus::PartiallyCompliant => "Partially Compliant",
            ComplianceStatus::NonCompliant => "Non-Compliant",
            ComplianceStatus::NotAnalyzed => "Not Analyzed",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
