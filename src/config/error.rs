//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("max_concurrency must be at least 1")]
    InvalidConcurrency,

    #[error("top_recommendations must be at least 1")]
    InvalidTopRecommendations,

    #[error("insight max_attempts must be at least 1")]
    InvalidMaxAttempts,

    #[error("insight timeout must be at least 1 second")]
    InvalidTimeout,
}
