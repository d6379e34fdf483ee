//! Rating value object for characteristic importance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance rating assigned to a characteristic by the caller.
///
/// Drives the weight of the characteristic in the overall score and the
/// severity scaling of its findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Rating {
    /// Weight used in the weighted mean for the overall score.
    pub fn weight(&self) -> u32 {
        match self {
            Rating::Critical => 4,
            Rating::High => 3,
            Rating::Medium => 2,
            Rating::Low => 1,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Critical => "Critical",
            Rating::High => "High",
            Rating::Medium => "Medium",
            Rating::Low => "Low",
        }
    }
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_descend_with_importance() {
        assert_eq!(Rating::Critical.weight(), 4);
        assert_eq!(Rating::High.weight(), 3);
        assert_eq!(Rating::Medium.weight(), 2);
        assert_eq!(Rating::Low.weight(), 1);
    }

    #[test]
    fn ordering_puts_critical_first() {
        assert!(Rating::Critical > Rating::High);
        assert!(Rating::High > Rating::Medium);
        assert!(Rating::Medium > Rating::Low);
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Rating::default(), Rating::Medium);
    }

    #[test]
    fn serde_round_trips_lowercase() {
        let json = serde_json::to_string(&Rating::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: Rating = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rating::Critical);
    }

    #[test]
    fn unknown_rating_is_rejected() {
        assert!(serde_json::from_str::<Rating>("\"urgent\"").is_err());
    }
}
