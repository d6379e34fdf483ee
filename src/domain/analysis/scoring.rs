//! Scoring engine: gaps + rating -> score and status, plus weighted
//! aggregation into one overall score.

use crate::domain::foundation::{ComplianceStatus, Rating, Score};

use super::gap::Gap;
use super::outcome::CharacteristicAnalysis;

/// Threshold below which critical-rated characteristics take an extra
/// penalty.
pub const CRITICAL_BAR: i32 = 70;

/// Flat penalty added when a critical-rated characteristic scores below the
/// bar.
pub const CRITICAL_EXTRA_PENALTY: i32 = 10;

/// Calculator for compliance scores.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes the per-characteristic score.
    ///
    /// Starts at 100 and subtracts a severity-keyed penalty per gap
    /// (critical 30, high 20, medium 10, low 5). When the rating is
    /// `critical` and the penalized total is below 70, a further flat 10 is
    /// subtracted. The total is clamped to 0 only once, after all penalties,
    /// so the extra penalty may drive the raw total below zero.
    pub fn score(gaps: &[Gap], rating: Rating) -> Score {
        let mut raw: i32 = 100;
        for gap in gaps {
            raw -= gap.severity.penalty();
        }
        if rating == Rating::Critical && raw < CRITICAL_BAR {
            raw -= CRITICAL_EXTRA_PENALTY;
        }
        Score::from_raw(raw)
    }

    /// Derives the compliance status band for a score.
    pub fn status(score: Score) -> ComplianceStatus {
        ComplianceStatus::from_score(score)
    }

    /// Computes the weighted overall score across analyzed characteristics.
    ///
    /// Weight is the characteristic rating (critical 4, high 3, medium 2,
    /// low 1); `not_analyzed` entries are excluded. Returns `None` when no
    /// characteristic is analyzable - the overall score is undefined, not
    /// zero.
    pub fn overall(analyses: &[CharacteristicAnalysis]) -> Option<Score> {
        let mut weighted_sum: u64 = 0;
        let mut weight_total: u64 = 0;
        for analysis in analyses {
            let Some(score) = analysis.score else { continue };
            let weight = analysis.rating.weight() as u64;
            weighted_sum += score.value() as u64 * weight;
            weight_total += weight;
        }
        if weight_total == 0 {
            return None;
        }
        // Round to nearest integer.
        let mean = (weighted_sum * 2 + weight_total) / (weight_total * 2);
        Some(Score::new(mean as u8))
    }
}
