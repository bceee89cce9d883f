//! Per-criterion data type descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage type of one criterion column.
///
/// Values are always held as `f64`; `Int64` columns hold integral values and
/// render without a fractional part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    Int64,
    #[default]
    Float64,
}

impl Dtype {
    /// Casts a value into this type. Casting to `Int64` truncates toward zero.
    pub fn cast(&self, value: f64) -> f64 {
        match self {
            Dtype::Int64 if value.is_finite() => value.trunc(),
            _ => value,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Dtype::Int64)
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dtype::Int64 => write!(f, "int64"),
            Dtype::Float64 => write!(f, "float64"),
        }
    }
}
