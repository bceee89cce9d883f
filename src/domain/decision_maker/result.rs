//! Evaluation results produced by rankers.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::DataError;
use crate::domain::matrix::render;

/// Additional method-specific information attached to a result.
pub type Extra = BTreeMap<String, Value>;

/// Values computed by a ranker before they are attached to alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<V> {
    pub values: Vec<V>,
    pub extra: Extra,
}

impl<V> Evaluation<V> {
    pub fn new(values: Vec<V>) -> Self {
        Self {
            values,
            extra: Extra::new(),
        }
    }

    /// Attaches one extra entry.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Common construction of result types, so rankers can build their output
/// generically.
pub trait EvaluationResult: Sized {
    /// Per-alternative value type.
    type Value;

    /// Label of the values row in the text view.
    const COLUMN: &'static str;

    /// Validates the values and builds the result.
    fn from_evaluation(
        method: impl Into<String>,
        alternatives: Vec<String>,
        evaluation: Evaluation<Self::Value>,
    ) -> Result<Self, DataError>;
}

/// Ranking of alternatives: the i-th value is the position of the i-th
/// alternative, starting at 1.
#[derive(Debug, Clone, Serialize)]
pub struct RankResult {
    method: String,
    alternatives: Vec<String>,
    values: Vec<usize>,
    extra: Extra,
}

impl RankResult {
    /// Creates a ranking.
    ///
    /// # Errors
    ///
    /// `InvalidRanking` unless the values are a permutation of `1..=n`, or
    /// `CardinalityMismatch` if there is not one value per alternative.
    pub fn new(
        method: impl Into<String>,
        alternatives: Vec<String>,
        values: Vec<usize>,
        extra: Extra,
    ) -> Result<Self, DataError> {
        let mut sorted = values.clone();
        sorted.sort_unstable();
        if !sorted.iter().copied().eq(1..=values.len()) {
            return Err(DataError::InvalidRanking { values });
        }
        if alternatives.len() != values.len() {
            return Err(DataError::cardinality("alternatives", values.len(), alternatives.len()));
        }

        Ok(Self {
            method: method.into(),
            alternatives,
            values,
            extra,
        })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Alias of [`values`](Self::values).
    pub fn rank(&self) -> &[usize] {
        &self.values
    }

    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    /// Returns (alternatives, 1).
    pub fn shape(&self) -> (usize, usize) {
        (self.values.len(), 1)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Alternatives in ranking order, best first.
    pub fn ordered_alternatives(&self) -> Vec<&str> {
        let mut pairs: Vec<_> = self.values.iter().zip(&self.alternatives).collect();
        pairs.sort_by_key(|(rank, _)| **rank);
        pairs.into_iter().map(|(_, name)| name.as_str()).collect()
    }
}

impl EvaluationResult for RankResult {
    type Value = usize;
    const COLUMN: &'static str = "Rank";

    fn from_evaluation(
        method: impl Into<String>,
        alternatives: Vec<String>,
        evaluation: Evaluation<usize>,
    ) -> Result<Self, DataError> {
        Self::new(method, alternatives, evaluation.values, evaluation.extra)
    }
}

/// Separates the alternatives into the kernel (selected) and the rest.
#[derive(Debug, Clone, Serialize)]
pub struct KernelResult {
    method: String,
    alternatives: Vec<String>,
    values: Vec<bool>,
    extra: Extra,
}

impl KernelResult {
    /// Creates a kernel selection.
    ///
    /// # Errors
    ///
    /// `CardinalityMismatch` if there is not one value per alternative.
    pub fn new(
        method: impl Into<String>,
        alternatives: Vec<String>,
        values: Vec<bool>,
        extra: Extra,
    ) -> Result<Self, DataError> {
        if alternatives.len() != values.len() {
            return Err(DataError::cardinality("alternatives", values.len(), alternatives.len()));
        }

        Ok(Self {
            method: method.into(),
            alternatives,
            values,
            extra,
        })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Alias of [`values`](Self::values).
    pub fn kernel(&self) -> &[bool] {
        &self.values
    }

    /// Indexes of the alternatives in the kernel.
    pub fn kernel_where(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, in_kernel)| in_kernel.then_some(i))
            .collect()
    }

    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.values.len(), 1)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl EvaluationResult for KernelResult {
    type Value = bool;
    const COLUMN: &'static str = "Kernel";

    fn from_evaluation(
        method: impl Into<String>,
        alternatives: Vec<String>,
        evaluation: Evaluation<bool>,
    ) -> Result<Self, DataError> {
        Self::new(method, alternatives, evaluation.values, evaluation.extra)
    }
}

// Equality ignores the method and the extra information.

impl PartialEq for RankResult {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.alternatives == other.alternatives && self.values == other.values)
    }
}

impl PartialEq for KernelResult {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.alternatives == other.alternatives && self.values == other.values)
    }
}

/// One-row table of values under the alternative names, then the method.
fn render_result(
    column: &str,
    alternatives: &[String],
    values: Vec<String>,
    method: &str,
) -> String {
    let cells: Vec<Vec<String>> = render::sign_pad(values)
        .into_iter()
        .map(|cell| vec![cell])
        .collect();
    let mut lines = render::layout(alternatives, &[column.to_string()], &cells);
    lines.push(format!("[Method: {}]", method));
    lines.join("\n")
}

impl fmt::Display for RankResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values.iter().map(ToString::to_string).collect();
        f.write_str(&render_result(Self::COLUMN, &self.alternatives, values, &self.method))
    }
}

impl fmt::Display for KernelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .values
            .iter()
            .map(|v| if *v { "True" } else { "False" }.to_string())
            .collect();
        f.write_str(&render_result(Self::COLUMN, &self.alternatives, values, &self.method))
    }
}
