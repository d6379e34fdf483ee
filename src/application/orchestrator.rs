//! The analysis run orchestrator.
//!
//! Drives one run through its lifecycle: validate the characteristics input,
//! present the approval checklist once, fan the selected characteristics out
//! over bounded-concurrency pipelines, and aggregate the per-characteristic
//! outcomes into the final result.
//!
//! The model and input are read-only throughout; a run holds no mutable
//! shared state, so cancelling it is dropping its future.

use std::fmt;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{InsightConfig, OrchestratorConfig};
use crate::domain::analysis::detectors::AnalyzerRegistry;
use crate::domain::analysis::{
    AnalysisResult, CharacteristicAnalysis, Gap, RecommendationEngine, ScoringEngine,
};
use crate::domain::characteristics::{
    CharacteristicCatalog, Characteristic, CharacteristicsInput, InputValidationError,
};
use crate::domain::foundation::Severity;
use crate::domain::model::C4Model;
use crate::ports::{ApprovalGate, Enrichment, InsightError, InsightProvider};

/// Lifecycle states of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    AwaitingApproval,
    Running,
    Aggregating,
    Complete,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Pending => "pending",
            RunState::AwaitingApproval => "awaiting_approval",
            RunState::Running => "running",
            RunState::Aggregating => "aggregating",
            RunState::Complete => "complete",
            RunState::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Failures ending a run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    InputValidation(#[from] InputValidationError),

    #[error("run rejected at the approval gate")]
    ApprovalRejected,

    #[error("analysis failed for every characteristic: {}", causes.join("; "))]
    AggregateAnalysis { causes: Vec<String> },
}

/// Orchestrates one analysis run end to end.
pub struct AnalysisOrchestrator {
    registry: AnalyzerRegistry,
    insight: Option<Arc<dyn InsightProvider>>,
    approval: Arc<dyn ApprovalGate>,
    orchestrator_config: OrchestratorConfig,
    insight_config: InsightConfig,
}

impl AnalysisOrchestrator {
    /// Orchestrator with the standard analyzer registry, no insight
    /// provider, and the given gate.
    pub fn new(
        approval: Arc<dyn ApprovalGate>,
        orchestrator_config: OrchestratorConfig,
        insight_config: InsightConfig,
    ) -> Self {
        Self {
            registry: AnalyzerRegistry::standard(),
            insight: None,
            approval,
            orchestrator_config,
            insight_config,
        }
    }

    /// Replaces the analyzer registry.
    pub fn with_registry(mut self, registry: AnalyzerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Attaches an insight provider for per-characteristic enrichment.
    pub fn with_insight_provider(mut self, provider: Arc<dyn InsightProvider>) -> Self {
        self.insight = Some(provider);
        self
    }

    /// Executes one analysis run.
    ///
    /// Validation rejects the whole input before any analyzer executes. The
    /// approval gate is invoked exactly once per run; non-interactive runs
    /// inject `AutoApprove` as the gate rather than skipping it, so the
    /// lifecycle is the same in both modes. Characteristic pipelines run
    /// concurrently, bounded by `max_concurrency`; their outcomes are
    /// re-assembled in input order so the result does not depend on
    /// completion order.
    pub async fn run(
        &self,
        model: &C4Model,
        input: &CharacteristicsInput,
    ) -> Result<AnalysisResult, EngineError> {
        info!(state = %RunState::Pending, project = %input.project, "starting analysis run");
        CharacteristicCatalog::validate(input)?;

        info!(state = %RunState::AwaitingApproval, "presenting approval checklist");
        let checklist = self.build_checklist(model, input);
        if !self.approval.approve(&checklist) {
            warn!(state = %RunState::Failed, "run rejected at the approval gate");
            return Err(EngineError::ApprovalRejected);
        }

        let selected: Vec<Characteristic> = input.selected().cloned().collect();
        info!(
            state = %RunState::Running,
            characteristics = selected.len(),
            max_concurrency = self.orchestrator_config.max_concurrency,
            "analyzing characteristics"
        );

        let mut outcomes: Vec<(usize, CharacteristicAnalysis, Option<String>)> =
            stream::iter(selected.iter().enumerate())
                .map(|(index, characteristic)| async move {
                    let (analysis, failure) = self.analyze_one(model, characteristic).await;
                    (index, analysis, failure)
                })
                .buffer_unordered(self.orchestrator_config.max_concurrency)
                .collect()
                .await;
        outcomes.sort_by_key(|(index, _, _)| *index);

        let causes: Vec<String> = outcomes
            .iter()
            .filter_map(|(_, _, failure)| failure.clone())
            .collect();
        let analyses: Vec<CharacteristicAnalysis> =
            outcomes.into_iter().map(|(_, analysis, _)| analysis).collect();

        if !causes.is_empty() && analyses.iter().all(|a| !a.is_analyzed()) {
            warn!(state = %RunState::Failed, failures = causes.len(), "every pipeline failed");
            return Err(EngineError::AggregateAnalysis { causes });
        }

        info!(state = %RunState::Aggregating, "assembling result");
        let overall_score = ScoringEngine::overall(&analyses);
        let critical_gaps = RecommendationEngine::critical_gaps(&analyses);
        let top_recommendations = RecommendationEngine::top_recommendations(
            &analyses,
            self.orchestrator_config.top_recommendations,
        );
        let executive_summary = Self::executive_summary(&analyses, &top_recommendations);

        info!(state = %RunState::Complete, overall = ?overall_score, "run complete");
        Ok(AnalysisResult {
            project: input.project.clone(),
            overall_score,
            analyses,
            critical_gaps,
            top_recommendations,
            executive_summary,
        })
    }

    /// One characteristic pipeline: detect, optionally enrich, score,
    /// recommend.
    ///
    /// Returns the outcome plus a failure cause when the pipeline degraded.
    /// A degraded characteristic is reported `not_analyzed` with a synthetic
    /// gap instead of failing the run.
    async fn analyze_one(
        &self,
        model: &C4Model,
        characteristic: &Characteristic,
    ) -> (CharacteristicAnalysis, Option<String>) {
        let tag = characteristic.tag();
        let Some(mut gaps) = self.registry.detect(model, characteristic) else {
            debug!(characteristic = %tag, "no analyzer registered, reporting not_analyzed");
            return (CharacteristicAnalysis::not_analyzed(characteristic, vec![]), None);
        };

        let mut extra_recommendations = Vec::new();
        if let Some(provider) = &self.insight {
            match self.enrich_with_retry(provider.as_ref(), model, characteristic, &gaps).await {
                Ok(enrichment) => {
                    gaps.extend(enrichment.gaps);
                    extra_recommendations = enrichment.recommendations;
                }
                Err(cause) => {
                    warn!(characteristic = %tag, %cause, "pipeline degraded");
                    let synthetic = Gap::new(
                        characteristic.name.clone(),
                        format!("Analysis incomplete: {cause}"),
                        Severity::Low,
                        "Findings for this characteristic are missing from the report",
                    );
                    return (
                        CharacteristicAnalysis::not_analyzed(characteristic, vec![synthetic]),
                        Some(format!("{tag}: {cause}")),
                    );
                }
            }
        }

        let score = ScoringEngine::score(&gaps, characteristic.rating);
        let mut recommendations = RecommendationEngine::recommend(&tag, &gaps);
        recommendations.extend(extra_recommendations);
        debug!(characteristic = %tag, score = %score, gaps = gaps.len(), "pipeline finished");
        (
            CharacteristicAnalysis::analyzed(characteristic, score, gaps, recommendations),
            None,
        )
    }

    /// Calls the insight provider with per-attempt timeout and exponential
    /// backoff. Non-retryable errors and retry exhaustion both surface as a
    /// degradation cause.
    async fn enrich_with_retry(
        &self,
        provider: &dyn InsightProvider,
        model: &C4Model,
        characteristic: &Characteristic,
        gaps: &[Gap],
    ) -> Result<Enrichment, String> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let call = provider.enrich(model, characteristic, gaps);
            let error = match tokio::time::timeout(self.insight_config.timeout(), call).await {
                Ok(Ok(enrichment)) => return Ok(enrichment),
                Ok(Err(error)) if error.is_retryable() => error.to_string(),
                Ok(Err(error)) => return Err(error.to_string()),
                Err(_) => InsightError::Timeout.to_string(),
            };
            if attempt >= self.insight_config.max_attempts {
                return Err(format!(
                    "insight enrichment failed after {attempt} attempts: {error}"
                ));
            }
            let delay = self.insight_config.backoff_delay(attempt);
            debug!(
                characteristic = %characteristic.tag(),
                attempt,
                delay_ms = delay.as_millis() as u64,
                %error,
                "retrying insight provider"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Checklist shown at the approval gate, summarizing what the run will
    /// analyze.
    fn build_checklist(&self, model: &C4Model, input: &CharacteristicsInput) -> Vec<String> {
        let mut checklist = vec![
            format!("Project: {}", input.project),
            format!(
                "Model: {} ({} systems, {} containers, {} relationships)",
                model.name,
                model.systems.len(),
                model.containers().count(),
                model.relationships.len()
            ),
        ];
        for c in input.selected() {
            let top = if c.is_top { ", top driver" } else { "" };
            checklist.push(format!("Analyze {} (rated {}{})", c.name, c.rating, top));
        }
        checklist.push(match &self.insight {
            Some(_) => "Insight enrichment: enabled".to_string(),
            None => "Insight enrichment: disabled".to_string(),
        });
        checklist
    }

    /// Deterministic executive summary: overall counts, the weakest
    /// characteristics, and the leading recommendations.
    fn executive_summary(
        analyses: &[CharacteristicAnalysis],
        top_recommendations: &[crate::domain::analysis::Recommendation],
    ) -> String {
        let analyzed: Vec<&CharacteristicAnalysis> =
            analyses.iter().filter(|a| a.is_analyzed()).collect();
        if analyzed.is_empty() {
            return "No characteristic could be analyzed.".to_string();
        }

        let gap_count: usize = analyses.iter().map(|a| a.gaps.len()).sum();
        let mut summary = format!(
            "Analyzed {} of {} characteristics and found {} gaps.",
            analyzed.len(),
            analyses.len(),
            gap_count
        );

        let mut weakest = analyzed.clone();
        weakest.sort_by_key(|a| a.score);
        let lagging: Vec<String> = weakest
            .iter()
            .take(3)
            .filter(|a| a.score.map(|s| s.value() < 90).unwrap_or(false))
            .map(|a| format!("{} ({})", a.characteristic, a.score.unwrap_or_default()))
            .collect();
        if !lagging.is_empty() {
            summary.push_str(&format!(" Weakest areas: {}.", lagging.join(", ")));
        }

        let leading: Vec<&str> = top_recommendations
            .iter()
            .take(3)
            .map(|r| r.title.as_str())
            .collect();
        if !leading.is_empty() {
            summary.push_str(&format!(" Start with: {}.", leading.join("; ")));
        }
        summary
    }
}
