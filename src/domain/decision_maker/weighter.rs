//! Weighter family: algorithms that assign criterion weights.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::domain::foundation::{DataError, Objective};
use crate::domain::matrix::{DecisionMatrix, MatrixData};

use super::{kind, validators, DecisionMaker, ValueObject};

/// An algorithm that computes new weights for the criteria.
pub trait Weighter: DecisionMaker<Kind = kind::Weighter> {
    /// Computes one weight per criterion.
    fn weight_data(&self, data: &MatrixData) -> Result<Vec<f64>, DataError>;

    /// Returns a new matrix with the computed weights; every other field is
    /// kept.
    fn weight(&self, dm: &DecisionMatrix) -> Result<DecisionMatrix, DataError> {
        let data = dm.to_data();
        self.validate_data(&data)?;

        let weights = self.weight_data(&data)?;
        let weighted = DecisionMatrix::from_data(data.with_weights(weights))?;

        debug!(
            decision_maker = <Self as ValueObject>::NAME,
            criteria = weighted.criteria_count(),
            "Criteria weighted"
        );

        Ok(weighted)
    }
}

decision_maker! {
    /// Assigns every criterion the same weight, `base_value / criteria`.
    pub struct EqualWeighter {
        base_value: f64 = 1.0 => validators::positive,
    }
}

impl DecisionMaker for EqualWeighter {
    type Kind = kind::Weighter;
}

impl Weighter for EqualWeighter {
    fn weight_data(&self, data: &MatrixData) -> Result<Vec<f64>, DataError> {
        let criteria = data.shape().1;
        Ok(vec![self.base_value / criteria as f64; criteria])
    }
}

decision_maker! {
    /// Weights each criterion by the sample standard deviation of its
    /// values, scaled so the weights sum to one.
    pub struct StdWeighter {}
}

impl DecisionMaker for StdWeighter {
    type Kind = kind::Weighter;

    fn validate_data(&self, data: &MatrixData) -> Result<(), DataError> {
        require_alternatives(data, 2, "standard deviation")
    }
}

impl Weighter for StdWeighter {
    fn weight_data(&self, data: &MatrixData) -> Result<Vec<f64>, DataError> {
        normalized(data.mtx.std_axis(Axis(0), 1.0))
    }
}

decision_maker! {
    /// Weights each criterion by the Shannon entropy of its values, each
    /// column read as a distribution over the alternatives.
    pub struct EntropyWeighter {}
}

impl DecisionMaker for EntropyWeighter {
    type Kind = kind::Weighter;

    fn validate_data(&self, data: &MatrixData) -> Result<(), DataError> {
        if data.mtx.iter().any(|v| *v < 0.0) {
            return Err(DataError::invalid_parameter(
                "mtx",
                "entropy needs non-negative values",
            ));
        }
        Ok(())
    }
}

impl Weighter for EntropyWeighter {
    fn weight_data(&self, data: &MatrixData) -> Result<Vec<f64>, DataError> {
        let entropy = data.mtx.map_axis(Axis(0), |column| {
            let total = column.sum();
            -column
                .iter()
                .filter(|v| **v > 0.0)
                .map(|v| {
                    let p = v / total;
                    p * p.ln()
                })
                .sum::<f64>()
        });
        normalized(entropy)
    }
}

/// Correlation coefficient between criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Correlation {
    #[default]
    Pearson,
    /// Pearson correlation of the ranks; ties share their average rank.
    Spearman,
}

impl Correlation {
    /// Correlation between every pair of columns of `mtx`.
    pub fn matrix(&self, mtx: &Array2<f64>) -> Result<Array2<f64>, DataError> {
        match self {
            Correlation::Pearson => pearson(mtx),
            Correlation::Spearman => {
                let mut ranked = Array2::zeros(mtx.raw_dim());
                for (mut target, column) in ranked.columns_mut().into_iter().zip(mtx.columns()) {
                    target.assign(&average_ranks(column));
                }
                pearson(&ranked)
            }
        }
    }
}

impl FromStr for Correlation {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pearson" => Ok(Correlation::Pearson),
            "spearman" => Ok(Correlation::Spearman),
            other => Err(DataError::invalid_parameter(
                "correlation",
                format!("must be 'pearson' or 'spearman', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correlation::Pearson => write!(f, "pearson"),
            Correlation::Spearman => write!(f, "spearman"),
        }
    }
}

fn pearson(mtx: &Array2<f64>) -> Result<Array2<f64>, DataError> {
    let means = mtx
        .mean_axis(Axis(0))
        .ok_or_else(|| DataError::invalid_parameter("mtx", "correlation needs alternatives"))?;
    let centered = mtx - &means;
    let covariance = centered.t().dot(&centered);
    let spread = covariance.diag().mapv(f64::sqrt);

    Ok(Array2::from_shape_fn(covariance.raw_dim(), |(j, k)| {
        covariance[[j, k]] / (spread[j] * spread[k])
    }))
}

/// One-based ranks; tied values share the mean of the ranks they span.
fn average_ranks(column: ArrayView1<'_, f64>) -> Array1<f64> {
    let n = column.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|a, b| column[*a].total_cmp(&column[*b]));

    let mut ranks = Array1::zeros(n);
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && column[order[end]] == column[order[start]] {
            end += 1;
        }
        let rank = (start + end + 1) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = rank;
        }
        start = end;
    }
    ranks
}

decision_maker! {
    /// CRITIC (CRiteria Importance Through Intercriteria Correlation).
    ///
    /// A criterion weighs more the wider its spread and the less it
    /// correlates with the others: `std_j * sum_k(1 - r_jk)`, scaled to sum
    /// to one. With `scale` every column is first mapped onto `[0, 1]`, the
    /// preferred end at 1.
    pub struct Critic {
        correlation: Correlation = Correlation::Pearson,
        scale: bool = true,
    }
}

impl Critic {
    /// Builds the weighter from a correlation name (`"pearson"` or
    /// `"spearman"`).
    pub fn with_correlation(correlation: &str, scale: bool) -> Result<Self, DataError> {
        Self::new(correlation.parse()?, scale)
    }
}

impl DecisionMaker for Critic {
    type Kind = kind::Weighter;

    fn validate_data(&self, data: &MatrixData) -> Result<(), DataError> {
        require_alternatives(data, 2, "correlation")
    }
}

impl Weighter for Critic {
    fn weight_data(&self, data: &MatrixData) -> Result<Vec<f64>, DataError> {
        if data.objectives.contains(&Objective::Min.code()) {
            warn!(
                decision_maker = <Self as ValueObject>::NAME,
                "Minimized criteria are weighted as given; consider inverting them first"
            );
        }

        let mtx = if self.scale {
            scale_by_ideal_distance(&data.mtx, &data.objectives)
        } else {
            data.mtx.clone()
        };

        let spread = mtx.std_axis(Axis(0), 0.0);
        let conflict = self.correlation.matrix(&mtx)?.mapv(|r| 1.0 - r).sum_axis(Axis(0));
        normalized(spread * conflict)
    }
}

/// Maps each column onto `[0, 1]`: the worst value to 0 and the best to 1.
fn scale_by_ideal_distance(mtx: &Array2<f64>, objectives: &[i8]) -> Array2<f64> {
    let mut scaled = mtx.clone();
    for (mut column, objective) in scaled.columns_mut().into_iter().zip(objectives) {
        let min = column.fold(f64::INFINITY, |acc, v| acc.min(*v));
        let max = column.fold(f64::NEG_INFINITY, |acc, v| acc.max(*v));
        let (worst, best) = if *objective == Objective::Min.code() {
            (max, min)
        } else {
            (min, max)
        };
        column.mapv_inplace(|v| (v - worst) / (best - worst));
    }
    scaled
}

fn require_alternatives(data: &MatrixData, minimum: usize, method: &str) -> Result<(), DataError> {
    if data.shape().0 < minimum {
        return Err(DataError::invalid_parameter(
            "mtx",
            format!("{} needs at least {} alternatives", method, minimum),
        ));
    }
    Ok(())
}

/// Scales raw weights to sum to one.
fn normalized(raw: Array1<f64>) -> Result<Vec<f64>, DataError> {
    let total = raw.sum();
    if !total.is_finite() || total == 0.0 {
        return Err(DataError::invalid_parameter(
            "mtx",
            format!("criteria spread must be finite and non-zero, got {}", total),
        ));
    }
    Ok(raw.iter().map(|w| w / total).collect())
}
