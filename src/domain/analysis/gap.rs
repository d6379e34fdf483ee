//! Gap record: a detected shortfall between the model and a characteristic.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Severity;

/// A detected architecture gap. Created only by a gap analyzer run (or the
/// insight provider's enrichment) and immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    /// Free text referencing the affected model element(s).
    pub area: String,
    /// What is missing or wrong.
    pub issue: String,
    pub severity: Severity,
    /// Consequence if left unaddressed.
    pub impact: String,
}

impl Gap {
    /// Creates a new gap.
    pub fn new(
        area: impl Into<String>,
        issue: impl Into<String>,
        severity: Severity,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            issue: issue.into(),
            severity,
            impact: impact.into(),
        }
    }
}
