//! Comparison tolerance configuration

use serde::Deserialize;

use crate::domain::matrix::Tolerance;

use super::error::ValidationError;

/// Tolerances used by approximate decision matrix equality
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonConfig {
    /// Relative tolerance
    #[serde(default = "default_rtol")]
    pub rtol: f64,

    /// Absolute tolerance
    #[serde(default = "default_atol")]
    pub atol: f64,

    /// Whether NaN compares equal to NaN
    #[serde(default)]
    pub equal_nan: bool,
}

impl ComparisonConfig {
    pub fn tolerance(&self) -> Tolerance {
        Tolerance {
            rtol: self.rtol,
            atol: self.atol,
            equal_nan: self.equal_nan,
        }
    }

    /// Validate comparison configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.rtol.is_finite() || self.rtol < 0.0 {
            return Err(ValidationError::InvalidTolerance("rtol"));
        }
        if !self.atol.is_finite() || self.atol < 0.0 {
            return Err(ValidationError::InvalidTolerance("atol"));
        }
        Ok(())
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            rtol: default_rtol(),
            atol: default_atol(),
            equal_nan: false,
        }
    }
}

fn default_rtol() -> f64 {
    1e-5
}

fn default_atol() -> f64 {
    1e-8
}
