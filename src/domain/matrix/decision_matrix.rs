//! Decision Matrix - the alternatives x criteria value object.

use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::domain::foundation::{DataError, Dtype, Objective};

use super::render::{self, RenderOptions};
use super::{DecisionMatrixBuilder, MatrixData};

/// Tolerances for approximate matrix comparison (numpy `allclose` semantics).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
    pub equal_nan: bool,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
            equal_nan: false,
        }
    }
}

impl Tolerance {
    /// Returns true if `a` and `b` are equal within this tolerance.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return self.equal_nan && a.is_nan() && b.is_nan();
        }
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

/// Validated components handed to [`DecisionMatrix::assemble`].
pub(crate) struct Parts {
    pub mtx: Array2<f64>,
    pub objectives: Vec<Objective>,
    pub weights: Option<Vec<f64>>,
    pub anames: Option<Vec<String>>,
    pub cnames: Option<Vec<String>>,
    pub dtypes: Option<Vec<Dtype>>,
    /// Fallback when no explicit dtypes were given; one per column.
    pub derived_dtypes: Vec<Dtype>,
}

/// An alternatives x criteria matrix with per-criterion objectives, weights
/// and named axes.
///
/// Instances are only produced through validated construction
/// ([`DecisionMatrixBuilder`], [`mkdm`](super::mkdm),
/// [`DecisionMatrix::from_data`]) and are never mutated afterwards; every
/// transformation yields a new matrix.
#[derive(Debug, Clone)]
pub struct DecisionMatrix {
    mtx: Array2<f64>,
    objectives: Vec<Objective>,
    weights: Vec<f64>,
    anames: Vec<String>,
    cnames: Vec<String>,
    dtypes: Vec<Dtype>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Rebuilds a matrix from a raw field record, validating it exactly like
    /// the construction entrypoint does.
    pub fn from_data(data: MatrixData) -> Result<Self, DataError> {
        let objectives = data
            .objectives
            .iter()
            .map(|code| Objective::from_code(i64::from(*code)))
            .collect::<Result<Vec<_>, _>>()?;
        let columns = data.mtx.ncols();

        Self::assemble(Parts {
            mtx: data.mtx,
            objectives,
            weights: Some(data.weights),
            anames: Some(data.anames),
            cnames: Some(data.cnames),
            dtypes: Some(data.dtypes),
            derived_dtypes: vec![Dtype::Float64; columns],
        })
    }

    /// Checks every component against the matrix dimensions, fills defaults
    /// and casts each column to its dtype.
    pub(crate) fn assemble(parts: Parts) -> Result<Self, DataError> {
        let Parts {
            mut mtx,
            objectives,
            weights,
            anames,
            cnames,
            dtypes,
            derived_dtypes,
        } = parts;
        let (a_number, c_number) = mtx.dim();

        if objectives.len() != c_number {
            return Err(DataError::cardinality("objectives", c_number, objectives.len()));
        }

        let weights = weights.unwrap_or_else(|| vec![1.0; c_number]);
        if weights.len() != c_number {
            return Err(DataError::cardinality("weights", c_number, weights.len()));
        }

        let anames = anames.unwrap_or_else(|| (0..a_number).map(|i| format!("A{}", i)).collect());
        if anames.len() != a_number {
            return Err(DataError::cardinality("anames", a_number, anames.len()));
        }

        let cnames = cnames.unwrap_or_else(|| (0..c_number).map(|i| format!("C{}", i)).collect());
        if cnames.len() != c_number {
            return Err(DataError::cardinality("cnames", c_number, cnames.len()));
        }

        let dtypes = dtypes.unwrap_or(derived_dtypes);
        if dtypes.len() != c_number {
            return Err(DataError::cardinality("dtypes", c_number, dtypes.len()));
        }

        for (mut column, dtype) in mtx.axis_iter_mut(Axis(1)).zip(&dtypes) {
            if dtype.is_integer() {
                column.mapv_inplace(|v| dtype.cast(v));
            }
        }

        trace!(
            alternatives = a_number,
            criteria = c_number,
            "Decision matrix assembled"
        );

        Ok(Self {
            mtx,
            objectives,
            weights,
            anames,
            cnames,
            dtypes,
        })
    }

    // Fields

    /// The alternatives x criteria numeric matrix.
    pub fn mtx(&self) -> &Array2<f64> {
        &self.mtx
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Objectives as their numeric codes (-1 min, 1 max).
    pub fn objectives_values(&self) -> Vec<i8> {
        self.objectives.iter().map(Objective::code).collect()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Names of the alternatives (rows).
    pub fn anames(&self) -> &[String] {
        &self.anames
    }

    /// Names of the criteria (columns).
    pub fn cnames(&self) -> &[String] {
        &self.cnames
    }

    pub fn dtypes(&self) -> &[Dtype] {
        &self.dtypes
    }

    // Derived views

    /// Returns (alternatives, criteria).
    pub fn shape(&self) -> (usize, usize) {
        self.mtx.dim()
    }

    pub fn alternative_count(&self) -> usize {
        self.mtx.nrows()
    }

    pub fn criteria_count(&self) -> usize {
        self.mtx.ncols()
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.mtx.nrows() == 0
    }

    /// Mask with `true` where the criterion is minimized.
    pub fn minwhere(&self) -> Vec<bool> {
        self.objectives.iter().map(Objective::is_min).collect()
    }

    /// Mask with `true` where the criterion is maximized.
    pub fn maxwhere(&self) -> Vec<bool> {
        self.objectives.iter().map(Objective::is_max).collect()
    }

    /// Values of one alternative across all criteria.
    pub fn alternative(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let idx = self.anames.iter().position(|a| a == name)?;
        Some(self.mtx.row(idx))
    }

    /// Values of one criterion across all alternatives.
    pub fn criterion(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let idx = self.cnames.iter().position(|c| c == name)?;
        Some(self.mtx.column(idx))
    }

    // Utilities

    /// Returns an independent deep copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns a builder pre-filled with this matrix's fields, for copying
    /// with some of them replaced.
    pub fn to_builder(&self) -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::from_matrix(self)
    }

    /// Returns the raw field record.
    pub fn to_data(&self) -> MatrixData {
        MatrixData {
            mtx: self.mtx.clone(),
            objectives: self.objectives_values(),
            weights: self.weights.clone(),
            anames: self.anames.clone(),
            cnames: self.cnames.clone(),
            dtypes: self.dtypes.clone(),
        }
    }

    /// Consumes the matrix into its raw field record.
    pub fn into_data(self) -> MatrixData {
        let objectives = self.objectives_values();
        MatrixData {
            mtx: self.mtx,
            objectives,
            weights: self.weights,
            anames: self.anames,
            cnames: self.cnames,
            dtypes: self.dtypes,
        }
    }

    /// Keeps only the named alternatives, in the given order.
    pub fn select_alternatives(&self, names: &[&str]) -> Result<Self, DataError> {
        let indices = names
            .iter()
            .map(|name| {
                self.anames
                    .iter()
                    .position(|a| a == name)
                    .ok_or_else(|| DataError::UnknownAlternative((*name).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::assemble(Parts {
            mtx: self.mtx.select(Axis(0), &indices),
            objectives: self.objectives.clone(),
            weights: Some(self.weights.clone()),
            anames: Some(indices.iter().map(|&i| self.anames[i].clone()).collect()),
            cnames: Some(self.cnames.clone()),
            dtypes: Some(self.dtypes.clone()),
            derived_dtypes: Vec::new(),
        })
    }

    /// Keeps only the named criteria, in the given order, with their
    /// objectives, weights and dtypes.
    pub fn select_criteria(&self, names: &[&str]) -> Result<Self, DataError> {
        let indices = names
            .iter()
            .map(|name| {
                self.cnames
                    .iter()
                    .position(|c| c == name)
                    .ok_or_else(|| DataError::UnknownCriterion((*name).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::assemble(Parts {
            mtx: self.mtx.select(Axis(1), &indices),
            objectives: indices.iter().map(|&i| self.objectives[i]).collect(),
            weights: Some(indices.iter().map(|&i| self.weights[i]).collect()),
            anames: Some(self.anames.clone()),
            cnames: Some(indices.iter().map(|&i| self.cnames[i].clone()).collect()),
            dtypes: Some(indices.iter().map(|&i| self.dtypes[i]).collect()),
            derived_dtypes: Vec::new(),
        })
    }

    // Comparison

    /// Equality with tolerance on weights and matrix values.
    ///
    /// Names and objectives must match exactly.
    pub fn aequals(&self, other: &Self, rtol: f64, atol: f64, equal_nan: bool) -> bool {
        self.aequals_with(
            other,
            &Tolerance {
                rtol,
                atol,
                equal_nan,
            },
        )
    }

    pub fn aequals_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        std::ptr::eq(self, other)
            || (self.shape() == other.shape()
                && self.cnames == other.cnames
                && self.anames == other.anames
                && self.objectives == other.objectives
                && self
                    .weights
                    .iter()
                    .zip(&other.weights)
                    .all(|(a, b)| tolerance.is_close(*a, *b))
                && self
                    .mtx
                    .iter()
                    .zip(other.mtx.iter())
                    .all(|(a, b)| tolerance.is_close(*a, *b)))
    }

    // Rendering

    /// Fixed-width text table using the given options.
    pub fn render_text(&self, options: &RenderOptions) -> String {
        render::render_text(self, options)
    }

    /// Minimal table markup using the given options.
    pub fn render_html(&self, options: &RenderOptions) -> String {
        render::render_html(self, options)
    }

    /// Minimal table markup with default options.
    pub fn to_html(&self) -> String {
        self.render_html(&RenderOptions::default())
    }
}

impl PartialEq for DecisionMatrix {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.mtx == other.mtx
                && self.objectives == other.objectives
                && self.weights == other.weights
                && self.anames == other.anames
                && self.cnames == other.cnames)
    }
}

impl fmt::Display for DecisionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text(&RenderOptions::default()))
    }
}
