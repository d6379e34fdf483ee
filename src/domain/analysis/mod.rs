//! The compliance analysis pipeline: gap detection, scoring, and
//! recommendation generation.

pub mod detectors;
mod gap;
mod knowledge;
mod outcome;
mod recommend;
mod scoring;

pub use gap::Gap;
pub use knowledge::{remedies_for, Remedy};
pub use outcome::{AnalysisResult, CharacteristicAnalysis, CriticalGap, Recommendation};
pub use recommend::{RecommendationEngine, DEFAULT_TOP_RECOMMENDATIONS};
pub use scoring::ScoringEngine;
