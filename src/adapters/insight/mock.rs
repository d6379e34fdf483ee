//! Deterministic insight providers for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::analysis::Gap;
use crate::domain::characteristics::Characteristic;
use crate::domain::model::C4Model;
use crate::ports::{Enrichment, InsightError, InsightProvider};

/// Provider returning the same enrichment for every characteristic.
pub struct StaticInsightProvider {
    enrichment: Enrichment,
}

impl StaticInsightProvider {
    pub fn new(enrichment: Enrichment) -> Self {
        Self { enrichment }
    }
}

#[async_trait]
impl InsightProvider for StaticInsightProvider {
    async fn enrich(
        &self,
        _model: &C4Model,
        _characteristic: &Characteristic,
        _gaps: &[Gap],
    ) -> Result<Enrichment, InsightError> {
        Ok(self.enrichment.clone())
    }
}

/// Provider failing a scripted number of times before succeeding.
///
/// Exercises the orchestrator's retry and degradation paths: with
/// `failures >= max_attempts` every call for the characteristic exhausts its
/// retries, with fewer failures the retry loop recovers.
pub struct FlakyInsightProvider {
    failures: usize,
    calls: AtomicUsize,
    enrichment: Enrichment,
}

impl FlakyInsightProvider {
    pub fn new(failures: usize, enrichment: Enrichment) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
            enrichment,
        }
    }

    /// Total calls observed across all characteristics and retries.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InsightProvider for FlakyInsightProvider {
    async fn enrich(
        &self,
        _model: &C4Model,
        _characteristic: &Characteristic,
        _gaps: &[Gap],
    ) -> Result<Enrichment, InsightError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(InsightError::Unavailable {
                reason: format!("scripted failure {}", call + 1),
            });
        }
        Ok(self.enrichment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Severity;

    fn model() -> C4Model {
        serde_json::from_str(r#"{"name":"m"}"#).unwrap()
    }

    fn characteristic() -> Characteristic {
        use crate::domain::characteristics::CharacteristicTag;
        use crate::domain::foundation::Rating;
        Characteristic::standard("c", &CharacteristicTag::Security, Rating::High)
    }

    #[tokio::test]
    async fn static_provider_returns_its_enrichment() {
        let enrichment = Enrichment {
            gaps: vec![Gap::new("x", "y", Severity::Low, "z")],
            recommendations: vec![],
        };
        let provider = StaticInsightProvider::new(enrichment);
        let got = provider
            .enrich(&model(), &characteristic(), &[])
            .await
            .unwrap();
        assert_eq!(got.gaps.len(), 1);
    }

    #[tokio::test]
    async fn flaky_provider_fails_then_recovers() {
        let provider = FlakyInsightProvider::new(2, Enrichment::default());
        assert!(provider.enrich(&model(), &characteristic(), &[]).await.is_err());
        assert!(provider.enrich(&model(), &characteristic(), &[]).await.is_err());
        assert!(provider.enrich(&model(), &characteristic(), &[]).await.is_ok());
        assert_eq!(provider.calls(), 3);
    }
}
