//! Effort value object for recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Implementation effort of a recommendation, fixed per remediation pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    /// Sort rank, lowest effort first (cheaper remediations sort earlier
    /// within the same priority).
    pub fn rank(&self) -> u8 {
        match self {
            Effort::Low => 0,
            Effort::Medium => 1,
            Effort::High => 2,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Effort::Low => "Low",
            Effort::Medium => "Medium",
            Effort::High => "High",
        }
    }
}

impl PartialOrd for Effort {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Effort {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_puts_low_first() {
        assert!(Effort::Low < Effort::Medium);
        assert!(Effort::Medium < Effort::High);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Effort::Medium).unwrap(), "\"medium\"");
    }
}
