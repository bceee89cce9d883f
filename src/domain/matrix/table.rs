//! Structured tabular export of a decision matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Dtype, Objective};

use super::render::{self, RenderOptions};
use super::DecisionMatrix;

/// Index label of the objectives row.
pub const OBJECTIVES_ROW: &str = "objectives";
/// Index label of the weights row.
pub const WEIGHTS_ROW: &str = "weights";

/// One value of the exported table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableCell {
    Objective(Objective),
    Weight(f64),
    Int(i64),
    Float(f64),
}

impl TableCell {
    /// Numeric value of the cell; objectives map to their code.
    pub fn as_f64(&self) -> f64 {
        match self {
            TableCell::Objective(objective) => f64::from(objective.code()),
            TableCell::Weight(v) | TableCell::Float(v) => *v,
            TableCell::Int(v) => *v as f64,
        }
    }
}

/// A labelled table whose first two rows are the objectives and the weights,
/// followed by one row per alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub index: Vec<String>,
    pub columns: Vec<String>,
    pub dtypes: Vec<Dtype>,
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    /// Returns (rows, columns), counting the objectives and weights rows.
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.columns.len())
    }

    /// Row by index label.
    pub fn row(&self, label: &str) -> Option<&[TableCell]> {
        let idx = self.index.iter().position(|l| l == label)?;
        self.rows.get(idx).map(Vec::as_slice)
    }

    /// Column by name, top to bottom. `None` when a row is too short to
    /// hold the column.
    pub fn column(&self, name: &str) -> Option<Vec<TableCell>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        self.rows.iter().map(|row| row.get(idx).copied()).collect()
    }

    pub fn cell(&self, label: &str, column: &str) -> Option<TableCell> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.row(label).and_then(|row| row.get(idx)).copied()
    }

    /// Rows holding matrix data, without the objectives and weights rows.
    pub fn data_rows(&self) -> &[Vec<TableCell>] {
        self.rows.get(2..).unwrap_or(&[])
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = RenderOptions::default().float_precision;
        let columns: Vec<Vec<String>> = (0..self.columns.len())
            .map(|j| {
                let cells: Vec<Option<TableCell>> =
                    self.rows.iter().map(|row| row.get(j).copied()).collect();

                let weights: Vec<f64> = cells
                    .iter()
                    .flatten()
                    .filter_map(|cell| match cell {
                        TableCell::Weight(w) => Some(*w),
                        _ => None,
                    })
                    .collect();
                let mut weights = render::format_floats(&weights, precision).into_iter();

                let values: Vec<f64> = cells
                    .iter()
                    .flatten()
                    .filter(|cell| matches!(cell, TableCell::Int(_) | TableCell::Float(_)))
                    .map(TableCell::as_f64)
                    .collect();
                let dtype = self.dtypes.get(j).copied().unwrap_or_default();
                let mut values = render::format_values(&values, dtype, precision).into_iter();

                cells
                    .iter()
                    .map(|cell| match cell {
                        None => String::new(),
                        Some(TableCell::Objective(objective)) => objective.label().to_string(),
                        Some(TableCell::Weight(_)) => weights.next().unwrap_or_default(),
                        Some(TableCell::Int(_) | TableCell::Float(_)) => {
                            values.next().unwrap_or_default()
                        }
                    })
                    .collect()
            })
            .collect();

        f.write_str(&render::layout(&self.columns, &self.index, &columns).join("\n"))
    }
}

impl DecisionMatrix {
    /// Exports the matrix as a [`Table`]; index is `objectives`, `weights`,
    /// then the alternative names, and columns are the criterion names.
    pub fn to_table(&self) -> Table {
        let mut index = Vec::with_capacity(self.alternative_count() + 2);
        index.push(OBJECTIVES_ROW.to_string());
        index.push(WEIGHTS_ROW.to_string());
        index.extend(self.anames().iter().cloned());

        let mut rows = Vec::with_capacity(index.len());
        rows.push(self.objectives().iter().copied().map(TableCell::Objective).collect());
        rows.push(self.weights().iter().copied().map(TableCell::Weight).collect());
        for values in self.mtx().rows() {
            rows.push(
                values
                    .iter()
                    .zip(self.dtypes())
                    .map(|(v, dtype)| match dtype {
                        Dtype::Int64 if render::fits_i64(*v) => TableCell::Int(*v as i64),
                        _ => TableCell::Float(*v),
                    })
                    .collect(),
            );
        }

        Table {
            index,
            columns: self.cnames().to_vec(),
            dtypes: self.dtypes().to_vec(),
            rows,
        }
    }
}
