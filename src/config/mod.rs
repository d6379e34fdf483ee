//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `ARCHGAUGE`
//! prefix and nested keys use double underscores as separators, e.g.
//! `ARCHGAUGE__ORCHESTRATOR__MAX_CONCURRENCY=8`.
//!
//! Every setting has a default, so a bare environment loads successfully.

mod error;
mod insight;
mod orchestrator;

pub use error::{ConfigError, ConfigValidationError};
pub use insight::InsightConfig;
pub use orchestrator::OrchestratorConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Run orchestration settings (concurrency, approval, report shape)
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,

    /// Insight provider settings (retries, backoff, timeout)
    #[serde(default)]
    pub insight: InsightConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads `ARCHGAUGE`-prefixed
    /// variables into the typed sections.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARCHGAUGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.orchestrator.validate()?;
        self.insight.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests touching them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("ARCHGAUGE__ORCHESTRATOR__MAX_CONCURRENCY");
        env::remove_var("ARCHGAUGE__ORCHESTRATOR__AUTO_APPROVE");
        env::remove_var("ARCHGAUGE__INSIGHT__MAX_ATTEMPTS");
    }

    #[test]
    fn loads_with_defaults_from_bare_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.orchestrator.max_concurrency, 4);
        assert_eq!(config.insight.max_attempts, 3);
    }

    #[test]
    fn environment_overrides_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ARCHGAUGE__ORCHESTRATOR__MAX_CONCURRENCY", "8");
        env::set_var("ARCHGAUGE__ORCHESTRATOR__AUTO_APPROVE", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.orchestrator.max_concurrency, 8);
        assert!(config.orchestrator.auto_approve);
    }
}
