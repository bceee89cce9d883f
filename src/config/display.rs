//! Display configuration

use serde::Deserialize;

use crate::domain::matrix::RenderOptions;

use super::error::ValidationError;

/// Largest number of decimals that still carries information for an `f64`.
pub const MAX_FLOAT_PRECISION: usize = 17;

/// Number formatting of the text and markup views
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Maximum decimals shown for float values
    #[serde(default = "default_float_precision")]
    pub float_precision: usize,
}

impl DisplayConfig {
    /// Options for [`DecisionMatrix::render_text`](crate::domain::matrix::DecisionMatrix::render_text)
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            float_precision: self.float_precision,
        }
    }

    /// Validate display configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.float_precision > MAX_FLOAT_PRECISION {
            return Err(ValidationError::FloatPrecisionTooLarge {
                max: MAX_FLOAT_PRECISION,
                actual: self.float_precision,
            });
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            float_precision: default_float_precision(),
        }
    }
}

fn default_float_precision() -> usize {
    6
}
