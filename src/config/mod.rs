//! Library configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! or files using the `config` and `dotenvy` crates. Environment variables use the
//! `MCDA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mcda_core::config::{init_tracing, McdaConfig};
//!
//! let config = McdaConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to initialize tracing");
//!
//! println!("Rendering with {} decimals", config.display.float_precision);
//! ```

mod comparison;
mod display;
mod error;
mod logging;

pub use comparison::ComparisonConfig;
pub use display::{DisplayConfig, MAX_FLOAT_PRECISION};
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix
const ENV_PREFIX: &str = "MCDA";

/// Root library configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`McdaConfig::load()`] or [`McdaConfig::from_file()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McdaConfig {
    /// Number formatting of rendered matrices
    #[serde(default)]
    pub display: DisplayConfig,

    /// Tolerances for approximate equality
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl McdaConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MCDA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDA__DISPLAY__FLOAT_PRECISION=4` -> `display.float_precision = 4`
    /// - `MCDA__COMPARISON__EQUAL_NAN=true` -> `comparison.equal_nan = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables taking
    /// precedence, then validate it
    ///
    /// The format (TOML, YAML, JSON, ...) is inferred from the extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if the
    /// resulting configuration is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "Configuration loaded from file");

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.display.validate()?;
        self.comparison.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}
