//! Descriptive statistics per criterion.

use ndarray::Array1;
use serde::Serialize;
use std::fmt;

use super::render::{self, RenderOptions};
use super::DecisionMatrix;

/// Row labels of the summary view, top to bottom.
pub const SUMMARY_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Statistics of one criterion column. NaN cells are skipped; statistics of
/// an empty column are NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionSummary {
    pub criterion: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1); NaN below two values.
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl CriterionSummary {
    fn from_column(criterion: &str, column: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = column.into_iter().filter(|v| !v.is_nan()).collect();
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let array = Array1::from(values);
        let mean = array.mean().unwrap_or(f64::NAN);
        let std = if count < 2 { f64::NAN } else { array.std(1.0) };
        let sorted = array.as_slice().unwrap_or(&[]);

        Self {
            criterion: criterion.to_string(),
            count,
            mean,
            std,
            min: quantile(sorted, 0.0),
            q1: quantile(sorted, 0.25),
            median: quantile(sorted, 0.5),
            q3: quantile(sorted, 0.75),
            max: quantile(sorted, 1.0),
        }
    }

    /// Values in [`SUMMARY_ROWS`] order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q1,
            self.median,
            self.q3,
            self.max,
        ]
    }
}

/// Linear interpolation between the closest ranks of sorted values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return f64::NAN;
    };
    let position = q * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Per-criterion descriptive statistics of a decision matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    criteria: Vec<CriterionSummary>,
}

impl Summary {
    pub fn criteria(&self) -> &[CriterionSummary] {
        &self.criteria
    }

    /// Statistics of one criterion by name.
    pub fn criterion(&self, name: &str) -> Option<&CriterionSummary> {
        self.criteria.iter().find(|c| c.criterion == name)
    }

    pub fn render_text(&self, options: &RenderOptions) -> String {
        let headers: Vec<String> = self.criteria.iter().map(|c| c.criterion.clone()).collect();
        let labels: Vec<String> = SUMMARY_ROWS.iter().map(|l| l.to_string()).collect();
        let columns: Vec<Vec<String>> = self
            .criteria
            .iter()
            .map(|c| render::format_floats(&c.values(), options.float_precision))
            .collect();

        render::layout(&headers, &labels, &columns).join("\n")
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text(&RenderOptions::default()))
    }
}

impl DecisionMatrix {
    /// Summarizes every criterion: count, mean, std, min, quartiles and max.
    pub fn describe(&self) -> Summary {
        let criteria = self
            .mtx()
            .columns()
            .into_iter()
            .zip(self.cnames())
            .map(|(column, name)| CriterionSummary::from_column(name, column.iter().copied()))
            .collect();

        Summary { criteria }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::mkdm;
    use serde_json::json;

    fn sample() -> DecisionMatrix {
        mkdm(&json!({
            "mtx": [[1, 2, 3], [4, 5, 6], [7, 8, 9]],
            "objectives": ["min", "max", "min"],
            "weights": [0.1, 0.2, 0.3],
        }))
        .unwrap()
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let summary = sample().describe();
        let c0 = summary.criterion("C0").unwrap();

        assert_eq!(c0.count, 3);
        assert_eq!(c0.mean, 4.0);
        assert_eq!(c0.std, 3.0);
        assert_eq!(c0.min, 1.0);
        assert_eq!(c0.q1, 2.5);
        assert_eq!(c0.median, 4.0);
        assert_eq!(c0.q3, 5.5);
        assert_eq!(c0.max, 7.0);

        assert_eq!(summary.criteria().len(), 3);
        assert_eq!(summary.criterion("C2").unwrap().q1, 4.5);
        assert!(summary.criterion("C9").is_none());
    }

    #[test]
    fn nan_cells_are_skipped() {
        let dm = mkdm(&json!({
            "mtx": [[1, null], [3, 4]],
            "objectives": ["max", "max"],
        }))
        .unwrap();
        let c1 = dm.describe().criteria()[1].clone();

        assert_eq!(c1.count, 1);
        assert_eq!(c1.mean, 4.0);
        assert!(c1.std.is_nan());
        assert_eq!(c1.min, 4.0);
        assert_eq!(c1.q3, 4.0);
    }

    #[test]
    fn empty_column_is_all_nan() {
        let summary = CriterionSummary::from_column("x", Vec::new());
        assert_eq!(summary.count, 0);
        assert!(summary.values()[1..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn display_lists_statistics_by_criterion() {
        let expected = "       C0  C1  C2\n\
                        count 3.0 3.0 3.0\n\
                        mean  4.0 5.0 6.0\n\
                        std   3.0 3.0 3.0\n\
                        min   1.0 2.0 3.0\n\
                        25%   2.5 3.5 4.5\n\
                        50%   4.0 5.0 6.0\n\
                        75%   5.5 6.5 7.5\n\
                        max   7.0 8.0 9.0";
        assert_eq!(sample().describe().to_string(), expected);
    }
}
