//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Float precision must be at most {max}, got {actual}")]
    FloatPrecisionTooLarge { max: usize, actual: usize },

    #[error("Tolerance '{0}' must be a finite, non-negative number")]
    InvalidTolerance(&'static str),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
