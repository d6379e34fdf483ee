//! Standard characteristic catalog and input validation.

use std::collections::BTreeSet;
use thiserror::Error;

use super::characteristic::CharacteristicsInput;
use super::tag::{Category, CharacteristicTag};

/// Maximum number of top ("driving") characteristics - the Rule of 7.
pub const MAX_TOP_CHARACTERISTICS: usize = 7;

/// One entry of the standard catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardCharacteristic {
    pub tag: &'static str,
    pub category: Category,
}

/// The 14 standard architecture characteristics.
pub const STANDARD_CATALOG: &[StandardCharacteristic] = &[
    StandardCharacteristic { tag: "Availability", category: Category::Operational },
    StandardCharacteristic { tag: "Performance", category: Category::Operational },
    StandardCharacteristic { tag: "Scalability", category: Category::Operational },
    StandardCharacteristic { tag: "Reliability", category: Category::Operational },
    StandardCharacteristic { tag: "Recoverability", category: Category::Operational },
    StandardCharacteristic { tag: "Elasticity", category: Category::Operational },
    StandardCharacteristic { tag: "Fault Tolerance", category: Category::Operational },
    StandardCharacteristic { tag: "Maintainability", category: Category::Structural },
    StandardCharacteristic { tag: "Testability", category: Category::Structural },
    StandardCharacteristic { tag: "Deployability", category: Category::Structural },
    StandardCharacteristic { tag: "Configurability", category: Category::Structural },
    StandardCharacteristic { tag: "Extensibility", category: Category::Structural },
    StandardCharacteristic { tag: "Security", category: Category::CrossCutting },
    StandardCharacteristic { tag: "Interoperability", category: Category::CrossCutting },
];

/// Characteristics input violated one or more invariants.
///
/// Carries every violated rule, not just the first, so the caller can fix
/// the whole document in one pass. No analysis starts while this error is
/// outstanding.
#[derive(Debug, Clone, Error)]
#[error("characteristics input invalid: {}", violations.join("; "))]
pub struct InputValidationError {
    pub violations: Vec<String>,
}

impl InputValidationError {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }
}

/// Validates caller-supplied characteristic selections against the catalog
/// invariants.
pub struct CharacteristicCatalog;

impl CharacteristicCatalog {
    /// Returns the standard tags in catalog order.
    pub fn standard_tags() -> Vec<CharacteristicTag> {
        STANDARD_CATALOG
            .iter()
            .map(|entry| CharacteristicTag::parse(entry.tag))
            .collect()
    }

    /// Validates the input document, collecting every violation.
    ///
    /// Checked, in order: unique non-empty ids, the Rule of 7, top implies
    /// selected, and `topCharacteristics` equal (as a set) to the `isTop`
    /// flagged subset. Enum-valued fields are already constrained to their
    /// closed sets by deserialization.
    pub fn validate(input: &CharacteristicsInput) -> Result<(), InputValidationError> {
        let mut violations = Vec::new();

        let mut seen = BTreeSet::new();
        for c in &input.characteristics {
            if c.id.trim().is_empty() {
                violations.push(format!("characteristic '{}' has an empty id", c.name));
            } else if !seen.insert(c.id.as_str()) {
                violations.push(format!("duplicate characteristic id '{}'", c.id));
            }
        }

        let top_flagged: BTreeSet<&str> = input.top().map(|c| c.id.as_str()).collect();
        if top_flagged.len() > MAX_TOP_CHARACTERISTICS {
            violations.push(format!(
                "{} characteristics flagged isTop, Rule of 7 allows at most {}",
                top_flagged.len(),
                MAX_TOP_CHARACTERISTICS
            ));
        }

        for c in input.top() {
            if !c.selected {
                violations.push(format!(
                    "characteristic '{}' is flagged isTop but not selected",
                    c.id
                ));
            }
        }

        let top_listed: BTreeSet<&str> =
            input.top_characteristics.iter().map(String::as_str).collect();
        for id in top_listed.difference(&top_flagged) {
            violations.push(format!(
                "topCharacteristics lists '{}' which is not flagged isTop",
                id
            ));
        }
        for id in top_flagged.difference(&top_listed) {
            violations.push(format!(
                "characteristic '{}' is flagged isTop but missing from topCharacteristics",
                id
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(InputValidationError::new(violations))
        }
    }
}
