//! Analysis outcome records: recommendations, per-characteristic analyses,
//! and the assembled result.
//!
//! The result is assembled once at the end of a run and is the only
//! externally persisted artifact. It carries no wall-clock metadata so that
//! repeated runs over identical inputs serialize byte-identically.

use serde::{Deserialize, Serialize};

use crate::domain::characteristics::{Category, Characteristic};
use crate::domain::foundation::{ComplianceStatus, Effort, Rating, Score, Severity};

use super::gap::Gap;

/// A remediation recommendation derived from one or more gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    /// Architecture pattern this recommendation applies, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    pub effort: Effort,
    /// Inherited from the originating gap's severity.
    pub priority: Severity,
    pub rationale: String,
    pub trade_offs: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}

/// Analysis outcome for a single characteristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicAnalysis {
    pub characteristic_id: String,
    pub characteristic: String,
    pub category: Category,
    pub rating: Rating,
    pub is_top: bool,
    /// `None` exactly when `status` is `not_analyzed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    pub status: ComplianceStatus,
    #[serde(default)]
    pub gaps: Vec<Gap>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl CharacteristicAnalysis {
    /// Creates an analyzed outcome.
    pub fn analyzed(
        characteristic: &Characteristic,
        score: Score,
        gaps: Vec<Gap>,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            characteristic_id: characteristic.id.clone(),
            characteristic: characteristic.name.clone(),
            category: characteristic.category,
            rating: characteristic.rating,
            is_top: characteristic.is_top,
            score: Some(score),
            status: ComplianceStatus::from_score(score),
            gaps,
            recommendations,
        }
    }

    /// Creates a `not_analyzed` outcome, optionally carrying a synthetic gap
    /// explaining why (degraded pipeline). Excluded from aggregation but
    /// always present in the report.
    pub fn not_analyzed(characteristic: &Characteristic, gaps: Vec<Gap>) -> Self {
        Self {
            characteristic_id: characteristic.id.clone(),
            characteristic: characteristic.name.clone(),
            category: characteristic.category,
            rating: characteristic.rating,
            is_top: characteristic.is_top,
            score: None,
            status: ComplianceStatus::NotAnalyzed,
            gaps,
            recommendations: Vec::new(),
        }
    }

    /// True when this analysis counts toward the overall score.
    pub fn is_analyzed(&self) -> bool {
        self.status.is_analyzed()
    }
}

/// A critical gap referenced back to its characteristic for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalGap {
    pub characteristic: String,
    pub rating: Rating,
    #[serde(flatten)]
    pub gap: Gap,
}

/// The assembled result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub project: String,
    /// Weighted overall score; `None` when zero characteristics were
    /// analyzable (undefined, not zero).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<Score>,
    pub analyses: Vec<CharacteristicAnalysis>,
    pub critical_gaps: Vec<CriticalGap>,
    pub top_recommendations: Vec<Recommendation>,
    pub executive_summary: String,
}
