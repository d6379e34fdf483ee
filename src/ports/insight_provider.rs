//! Optional enrichment port.
//!
//! A provider may contribute additional gaps and recommendations for a
//! characteristic on top of the deterministic analyzer output. The engine
//! treats the provider as unreliable: calls are retried with backoff and a
//! per-attempt timeout, and exhaustion degrades the characteristic instead
//! of failing the run.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::{Gap, Recommendation};
use crate::domain::characteristics::Characteristic;
use crate::domain::model::C4Model;

/// Extra findings contributed by an insight provider.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub gaps: Vec<Gap>,
    pub recommendations: Vec<Recommendation>,
}

/// Failures surfaced by an insight provider.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("insight provider timed out")]
    Timeout,

    #[error("insight provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("insight provider rate limited")]
    RateLimited,

    #[error("insight provider returned an invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl InsightError {
    /// Transient failures are retried; malformed responses are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Unavailable { .. } | Self::RateLimited
        )
    }
}

/// External source of additional per-characteristic findings.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Returns extra gaps and recommendations for one characteristic, given
    /// the model and the deterministic gaps already detected.
    async fn enrich(
        &self,
        model: &C4Model,
        characteristic: &Characteristic,
        gaps: &[Gap],
    ) -> Result<Enrichment, InsightError>;
}
