//! Run orchestration configuration

use serde::Deserialize;

use crate::domain::analysis::DEFAULT_TOP_RECOMMENDATIONS;

use super::error::ConfigValidationError;

/// Orchestrator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OrchestratorConfig {
    /// Maximum characteristic pipelines analyzed concurrently
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Use the always-approving gate instead of prompting (non-interactive
    /// runs)
    #[serde(default)]
    pub auto_approve: bool,

    /// Size of the top-recommendation list in the result
    #[serde(default = "default_top_recommendations")]
    pub top_recommendations: usize,
}

impl OrchestratorConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_concurrency == 0 {
            return Err(ConfigValidationError::InvalidConcurrency);
        }
        if self.top_recommendations == 0 {
            return Err(ConfigValidationError::InvalidTopRecommendations);
        }
        Ok(())
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            auto_approve: false,
            top_recommendations: default_top_recommendations(),
        }
    }
}

fn default_max_concurrency() -> usize {
    4
}

fn default_top_recommendations() -> usize {
    DEFAULT_TOP_RECOMMENDATIONS
}
