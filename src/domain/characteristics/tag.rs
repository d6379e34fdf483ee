//! Characteristic tag and category enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an architecture characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Operational,
    Structural,
    CrossCutting,
}

impl Category {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Operational => "Operational",
            Category::Structural => "Structural",
            Category::CrossCutting => "Cross-Cutting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Closed set of the 14 standard characteristic tags, plus `Custom` for
/// caller-defined characteristics.
///
/// Analyzer dispatch is keyed by this enum rather than by raw strings, so a
/// typo in a characteristic name degrades to `Custom` (reported as
/// `not_analyzed`) instead of silently running the wrong analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacteristicTag {
    // Operational
    Availability,
    Performance,
    Scalability,
    Reliability,
    Recoverability,
    Elasticity,
    FaultTolerance,
    // Structural
    Maintainability,
    Testability,
    Deployability,
    Configurability,
    Extensibility,
    // Cross-cutting
    Security,
    Interoperability,
    /// A characteristic outside the standard set, carrying its
    /// caller-supplied name.
    Custom(String),
}

impl CharacteristicTag {
    /// Parses a characteristic name into a tag; unrecognized names become
    /// `Custom`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "availability" => CharacteristicTag::Availability,
            "performance" => CharacteristicTag::Performance,
            "scalability" => CharacteristicTag::Scalability,
            "reliability" => CharacteristicTag::Reliability,
            "recoverability" => CharacteristicTag::Recoverability,
            "elasticity" => CharacteristicTag::Elasticity,
            "fault_tolerance" => CharacteristicTag::FaultTolerance,
            "maintainability" => CharacteristicTag::Maintainability,
            "testability" => CharacteristicTag::Testability,
            "deployability" => CharacteristicTag::Deployability,
            "configurability" => CharacteristicTag::Configurability,
            "extensibility" => CharacteristicTag::Extensibility,
            "security" => CharacteristicTag::Security,
            "interoperability" => CharacteristicTag::Interoperability,
            _ => CharacteristicTag::Custom(name.trim().to_string()),
        }
    }

    /// True for the 14 standard tags.
    pub fn is_standard(&self) -> bool {
        !matches!(self, CharacteristicTag::Custom(_))
    }

    /// Canonical category for standard tags; custom characteristics default
    /// to cross-cutting.
    pub fn category(&self) -> Category {
        match self {
            CharacteristicTag::Availability
            | CharacteristicTag::Performance
            | CharacteristicTag::Scalability
            | CharacteristicTag::Reliability
            | CharacteristicTag::Recoverability
            | CharacteristicTag::Elasticity
            | CharacteristicTag::FaultTolerance => Category::Operational,
            CharacteristicTag::Maintainability
            | CharacteristicTag::Testability
            | CharacteristicTag::Deployability
            | CharacteristicTag::Configurability
            | CharacteristicTag::Extensibility => Category::Structural,
            CharacteristicTag::Security
            | CharacteristicTag::Interoperability
            | CharacteristicTag::Custom(_) => Category::CrossCutting,
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &str {
        match self {
            CharacteristicTag::Availability => "Availability",
            CharacteristicTag::Performance => "Performance",
            CharacteristicTag::Scalability => "Scalability",
            CharacteristicTag::Reliability => "Reliability",
            CharacteristicTag::Recoverability => "Recoverability",
            CharacteristicTag::Elasticity => "Elasticity",
            CharacteristicTag::FaultTolerance => "Fault Tolerance",
            CharacteristicTag::Maintainability => "Maintainability",
            CharacteristicTag::Testability => "Testability",
            CharacteristicTag::Deployability => "Deployability",
            CharacteristicTag::Configurability => "Configurability",
            CharacteristicTag::Extensibility => "Extensibility",
            CharacteristicTag::Security => "Security",
            CharacteristicTag::Interoperability => "Interoperability",
            CharacteristicTag::Custom(name) => name,
        }
    }
}

impl From<String> for CharacteristicTag {
    fn from(s: String) -> Self {
        CharacteristicTag::parse(&s)
    }
}

impl From<CharacteristicTag> for String {
    fn from(tag: CharacteristicTag) -> Self {
        tag.name().to_string()
    }
}

impl fmt::Display for CharacteristicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_names_case_insensitively() {
        assert_eq!(CharacteristicTag::parse("Availability"), CharacteristicTag::Availability);
        assert_eq!(CharacteristicTag::parse("fault tolerance"), CharacteristicTag::FaultTolerance);
        assert_eq!(CharacteristicTag::parse("Fault-Tolerance"), CharacteristicTag::FaultTolerance);
        assert_eq!(CharacteristicTag::parse("SECURITY"), CharacteristicTag::Security);
    }

    #[test]
    fn unknown_names_become_custom() {
        let tag = CharacteristicTag::parse("Auditability");
        assert_eq!(tag, CharacteristicTag::Custom("Auditability".to_string()));
        assert!(!tag.is_standard());
    }

    #[test]
    fn categories_partition_the_standard_set() {
        let operational = [
            CharacteristicTag::Availability,
            CharacteristicTag::Performance,
            CharacteristicTag::Scalability,
            CharacteristicTag::Reliability,
            CharacteristicTag::Recoverability,
            CharacteristicTag::Elasticity,
            CharacteristicTag::FaultTolerance,
        ];
        let structural = [
            CharacteristicTag::Maintainability,
            CharacteristicTag::Testability,
            CharacteristicTag::Deployability,
            CharacteristicTag::Configurability,
            CharacteristicTag::Extensibility,
        ];
        for tag in &operational {
            assert_eq!(tag.category(), Category::Operational);
        }
        for tag in &structural {
            assert_eq!(tag.category(), Category::Structural);
        }
        assert_eq!(CharacteristicTag::Security.category(), Category::CrossCutting);
        assert_eq!(CharacteristicTag::Interoperability.category(), Category::CrossCutting);
    }

    #[test]
    fn serde_round_trips_through_names() {
        let json = serde_json::to_string(&CharacteristicTag::FaultTolerance).unwrap();
        assert_eq!(json, "\"Fault Tolerance\"");
        let back: CharacteristicTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CharacteristicTag::FaultTolerance);

        let custom: CharacteristicTag = serde_json::from_str("\"Auditability\"").unwrap();
        assert_eq!(custom, CharacteristicTag::Custom("Auditability".to_string()));
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::CrossCutting).unwrap();
        assert_eq!(json, "\"cross_cutting\"");
    }
}
