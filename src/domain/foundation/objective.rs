//! Objective value object: the optimization direction of a criterion.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::DataError;

/// Textual aliases resolving to [`Objective::Min`].
pub const MIN_ALIASES: &[&str] = &["min", "minimize", "minimise", "<", "<=", "-", "\u{25bc}"];

/// Textual aliases resolving to [`Objective::Max`].
pub const MAX_ALIASES: &[&str] = &["max", "maximize", "maximise", ">", ">=", "+", "\u{25b2}"];

/// Lowercased alias -> objective. Min is inserted first and wins on overlap.
static ALIAS_TABLE: Lazy<HashMap<&'static str, Objective>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for alias in MIN_ALIASES {
        table.entry(*alias).or_insert(Objective::Min);
    }
    for alias in MAX_ALIASES {
        table.entry(*alias).or_insert(Objective::Max);
    }
    table
});

/// Optimization direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i8)]
pub enum Objective {
    Min = -1,
    Max = 1,
}

impl Objective {
    /// Resolves any supported alias: a numeric code, a textual alias or a
    /// glyph.
    pub fn construct_from_alias(value: &Value) -> Result<Self, DataError> {
        match value {
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(code), _) => Self::from_code(code),
                (None, Some(code)) if code == -1.0 => Ok(Objective::Min),
                (None, Some(code)) if code == 1.0 => Ok(Objective::Max),
                _ => Err(DataError::invalid_objective(n)),
            },
            Value::String(s) => s.parse(),
            other => Err(DataError::invalid_objective(other)),
        }
    }

    /// Resolves a canonical numeric code (-1 or 1).
    pub fn from_code(code: i64) -> Result<Self, DataError> {
        match code {
            -1 => Ok(Objective::Min),
            1 => Ok(Objective::Max),
            _ => Err(DataError::invalid_objective(code)),
        }
    }

    /// Returns the canonical numeric code.
    pub fn code(&self) -> i8 {
        *self as i8
    }

    /// Returns the display glyph (down triangle for min, up triangle for max).
    pub fn glyph(&self) -> &'static str {
        match self {
            Objective::Min => "\u{25bc}",
            Objective::Max => "\u{25b2}",
        }
    }

    /// Returns the upper-case label.
    pub fn label(&self) -> &'static str {
        match self {
            Objective::Min => "MIN",
            Objective::Max => "MAX",
        }
    }

    pub fn is_min(&self) -> bool {
        matches!(self, Objective::Min)
    }

    pub fn is_max(&self) -> bool {
        matches!(self, Objective::Max)
    }

    /// Returns true if `a` is strictly preferred to `b` under this objective.
    pub fn prefers(&self, a: f64, b: f64) -> bool {
        match self {
            Objective::Min => a < b,
            Objective::Max => a > b,
        }
    }
}

impl FromStr for Objective {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Some(objective) = ALIAS_TABLE.get(key.as_str()) {
            return Ok(*objective);
        }
        match key.parse::<i64>() {
            Ok(code) => Self::from_code(code),
            Err(_) => Err(DataError::invalid_objective(s)),
        }
    }
}

impl TryFrom<&Value> for Objective {
    type Error = DataError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::construct_from_alias(value)
    }
}

impl TryFrom<Ordering> for Objective {
    type Error = DataError;

    /// `Less` reads as "prefer the minimum", `Greater` as "prefer the maximum".
    fn try_from(ordering: Ordering) -> Result<Self, Self::Error> {
        match ordering {
            Ordering::Less => Ok(Objective::Min),
            Ordering::Greater => Ok(Objective::Max),
            Ordering::Equal => Err(DataError::invalid_objective("Ordering::Equal")),
        }
    }
}

impl From<Objective> for Value {
    fn from(objective: Objective) -> Self {
        Value::from(objective.code())
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
