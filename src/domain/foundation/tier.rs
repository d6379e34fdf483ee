//! Criticality tier classification for containers and components.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered criticality classification, CS1 most critical.
///
/// CS tiers are mission-critical service classes, SL tiers are standard
/// service levels, `Standard` is everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriticalityTier {
    #[serde(rename = "CS1")]
    Cs1,
    #[serde(rename = "CS2")]
    Cs2,
    #[serde(rename = "SL1")]
    Sl1,
    #[serde(rename = "SL2")]
    Sl2,
    #[default]
    #[serde(rename = "STANDARD")]
    Standard,
}

impl CriticalityTier {
    /// Sort rank, most critical first.
    pub fn rank(&self) -> u8 {
        match self {
            CriticalityTier::Cs1 => 0,
            CriticalityTier::Cs2 => 1,
            CriticalityTier::Sl1 => 2,
            CriticalityTier::Sl2 => 3,
            CriticalityTier::Standard => 4,
        }
    }

    /// True for the mission-critical tiers (CS1/CS2) that availability and
    /// fault-tolerance analyzers hold to a stricter bar.
    pub fn is_mission_critical(&self) -> bool {
        matches!(self, CriticalityTier::Cs1 | CriticalityTier::Cs2)
    }

    /// True for tiers expected to see significant traffic (CS1..SL1).
    pub fn is_high_traffic(&self) -> bool {
        self.rank() <= CriticalityTier::Sl1.rank()
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriticalityTier::Cs1 => "CS1",
            CriticalityTier::Cs2 => "CS2",
            CriticalityTier::Sl1 => "SL1",
            CriticalityTier::Sl2 => "SL2",
            CriticalityTier::Standard => "STANDARD",
        }
    }
}

impl PartialOrd for CriticalityTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CriticalityTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Most critical compares greatest.
        other.rank().cmp(&self.rank())
    }
}

impl fmt::Display for CriticalityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cs1_is_most_critical() {
        assert!(CriticalityTier::Cs1 > CriticalityTier::Cs2);
        assert!(CriticalityTier::Cs2 > CriticalityTier::Sl1);
        assert!(CriticalityTier::Sl1 > CriticalityTier::Sl2);
        assert!(CriticalityTier::Sl2 > CriticalityTier::Standard);
    }

    #[test]
    fn mission_critical_covers_cs_tiers_only() {
        assert!(CriticalityTier::Cs1.is_mission_critical());
        assert!(CriticalityTier::Cs2.is_mission_critical());
        assert!(!CriticalityTier::Sl1.is_mission_critical());
        assert!(!CriticalityTier::Standard.is_mission_critical());
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(CriticalityTier::default(), CriticalityTier::Standard);
    }

    #[test]
    fn serializes_with_uppercase_names() {
        assert_eq!(serde_json::to_string(&CriticalityTier::Cs1).unwrap(), "\"CS1\"");
        assert_eq!(
            serde_json::to_string(&CriticalityTier::Standard).unwrap(),
            "\"STANDARD\""
        );
        let tier: CriticalityTier = serde_json::from_str("\"SL2\"").unwrap();
        assert_eq!(tier, CriticalityTier::Sl2);
    }
}
