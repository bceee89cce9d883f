//! Explicit field record exchanged between a decision matrix and the
//! algorithms that transform it.

use ndarray::Array2;

use crate::domain::foundation::Dtype;

/// All raw fields of a decision matrix, passed and returned by value.
///
/// Objectives travel as their numeric codes (-1 / 1); rebuilding a matrix
/// from this record resolves them again through alias lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixData {
    pub mtx: Array2<f64>,
    pub objectives: Vec<i8>,
    pub weights: Vec<f64>,
    pub anames: Vec<String>,
    pub cnames: Vec<String>,
    pub dtypes: Vec<Dtype>,
}

impl MatrixData {
    /// Returns (alternatives, criteria).
    pub fn shape(&self) -> (usize, usize) {
        self.mtx.dim()
    }

    /// Replaces the weights, keeping every other field.
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the matrix, keeping every other field.
    pub fn with_mtx(mut self, mtx: Array2<f64>) -> Self {
        self.mtx = mtx;
        self
    }
}
