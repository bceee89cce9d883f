//! Dominance Analyzer - Pairwise dominance and uniform criterion detection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::DataError;

use super::DecisionMatrix;

/// An alternative that is dominated by another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominatedAlternative {
    pub alternative: String,
    pub dominated_by: String,
    pub explanation: String,
}

impl DominatedAlternative {
    pub fn with_explanation(
        alternative: impl Into<String>,
        dominated_by: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            alternative: alternative.into(),
            dominated_by: dominated_by.into(),
            explanation: explanation.into(),
        }
    }
}

/// A criterion on which every alternative has the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformCriterion {
    pub criterion: String,
    pub value: f64,
}

/// Dominance analysis over a decision matrix, honoring each criterion's
/// objective.
pub struct DominanceAnalyzer;

impl DominanceAnalyzer {
    /// Checks if alternative `a` dominates alternative `b`.
    ///
    /// `a` dominates `b` when it is at least as good on every criterion and
    /// strictly better on at least one. NaN values are never better nor
    /// worse, so they block dominance on that criterion.
    ///
    /// # Errors
    ///
    /// `UnknownAlternative` if either name is not in the matrix.
    pub fn dominates(dm: &DecisionMatrix, a: &str, b: &str) -> Result<bool, DataError> {
        let a_idx = Self::position(dm, a)?;
        let b_idx = Self::position(dm, b)?;
        Ok(Self::dominates_at(dm, a_idx, b_idx))
    }

    /// Finds all dominated alternatives, each with its first dominator.
    ///
    /// # Edge Cases
    /// - Fewer than two alternatives: Returns empty Vec
    /// - Identical alternatives: Neither dominates the other
    pub fn find_dominated(dm: &DecisionMatrix) -> Vec<DominatedAlternative> {
        let count = dm.alternative_count();
        let mut dominated = Vec::new();

        if count < 2 {
            return dominated;
        }

        for candidate in 0..count {
            let dominator = (0..count)
                .filter(|&other| other != candidate)
                .find(|&other| Self::dominates_at(dm, other, candidate));

            if let Some(dominator) = dominator {
                dominated.push(DominatedAlternative::with_explanation(
                    dm.anames()[candidate].clone(),
                    dm.anames()[dominator].clone(),
                    Self::explain_dominance(dm, dominator, candidate),
                ));
            }
        }

        dominated
    }

    /// Finds criteria that don't distinguish between alternatives.
    pub fn find_uniform_criteria(dm: &DecisionMatrix) -> Vec<UniformCriterion> {
        if dm.alternative_count() < 2 {
            return Vec::new();
        }

        dm.mtx()
            .columns()
            .into_iter()
            .zip(dm.cnames())
            .filter_map(|(column, name)| {
                let first = column[0];
                column
                    .iter()
                    .all(|v| *v == first)
                    .then(|| UniformCriterion {
                        criterion: name.clone(),
                        value: first,
                    })
            })
            .collect()
    }

    fn position(dm: &DecisionMatrix, name: &str) -> Result<usize, DataError> {
        dm.anames()
            .iter()
            .position(|a| a == name)
            .ok_or_else(|| DataError::UnknownAlternative(name.to_string()))
    }

    /// Per-criterion comparison of row `a` against row `b`, from the point of
    /// view of each objective. `None` where either value is NaN.
    fn compare(dm: &DecisionMatrix, a: usize, b: usize) -> impl Iterator<Item = Option<Ordering>> + '_ {
        dm.objectives().iter().enumerate().map(move |(j, objective)| {
            let (va, vb) = (dm.mtx()[[a, j]], dm.mtx()[[b, j]]);
            va.partial_cmp(&vb).map(|ord| {
                if objective.is_min() {
                    ord.reverse()
                } else {
                    ord
                }
            })
        })
    }

    fn dominates_at(dm: &DecisionMatrix, a: usize, b: usize) -> bool {
        let mut strictly_better_on_one = false;

        for ordering in Self::compare(dm, a, b) {
            match ordering {
                Some(Ordering::Greater) => strictly_better_on_one = true,
                Some(Ordering::Equal) => {}
                Some(Ordering::Less) | None => return false,
            }
        }

        strictly_better_on_one
    }

    fn explain_dominance(dm: &DecisionMatrix, a: usize, b: usize) -> String {
        let better_on: Vec<&str> = Self::compare(dm, a, b)
            .zip(dm.cnames())
            .filter(|(ordering, _)| *ordering == Some(Ordering::Greater))
            .map(|(_, name)| name.as_str())
            .collect();

        format!(
            "{} is at least as good on all criteria and strictly better on: {}",
            dm.anames()[a],
            better_on.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::mkdm;
    use serde_json::json;

    fn sample() -> DecisionMatrix {
        // cost (min), quality (max)
        mkdm(&json!({
            "mtx": [[10, 5], [12, 5], [8, 9], [8, 9]],
            "objectives": ["min", "max"],
            "anames": ["basic", "pricey", "best", "best_twin"],
            "cnames": ["cost", "quality"],
        }))
        .unwrap()
    }

    #[test]
    fn minimized_criteria_prefer_lower_values() {
        let dm = sample();
        assert!(DominanceAnalyzer::dominates(&dm, "basic", "pricey").unwrap());
        assert!(!DominanceAnalyzer::dominates(&dm, "pricey", "basic").unwrap());
    }

    #[test]
    fn identical_alternatives_do_not_dominate() {
        let dm = sample();
        assert!(!DominanceAnalyzer::dominates(&dm, "best", "best_twin").unwrap());
        assert!(!DominanceAnalyzer::dominates(&dm, "best_twin", "best").unwrap());
    }

    #[test]
    fn unknown_alternative_is_an_error() {
        let dm = sample();
        assert_eq!(
            DominanceAnalyzer::dominates(&dm, "basic", "ghost").unwrap_err(),
            DataError::UnknownAlternative("ghost".to_string())
        );
    }

    #[test]
    fn find_dominated_reports_first_dominator() {
        let dominated = DominanceAnalyzer::find_dominated(&sample());
        let names: Vec<_> = dominated.iter().map(|d| d.alternative.as_str()).collect();
        assert_eq!(names, vec!["basic", "pricey"]);

        assert_eq!(dominated[0].dominated_by, "best");
        assert!(dominated[0].explanation.contains("strictly better on: cost, quality"));
        assert_eq!(dominated[1].dominated_by, "basic");
        assert!(dominated[1].explanation.ends_with("strictly better on: cost"));
    }

    #[test]
    fn nan_blocks_dominance() {
        let dm = mkdm(&json!({
            "mtx": [[1, null], [2, 3]],
            "objectives": ["max", "max"],
        }))
        .unwrap();
        assert!(!DominanceAnalyzer::dominates(&dm, "A1", "A0").unwrap());
        assert!(DominanceAnalyzer::find_dominated(&dm).is_empty());
    }

    #[test]
    fn single_alternative_has_nothing_to_compare() {
        let dm = mkdm(&json!({"mtx": [[1, 2]], "objectives": ["max", "min"]})).unwrap();
        assert!(DominanceAnalyzer::find_dominated(&dm).is_empty());
        assert!(DominanceAnalyzer::find_uniform_criteria(&dm).is_empty());
    }

    #[test]
    fn uniform_criteria_are_detected() {
        let uniform = DominanceAnalyzer::find_uniform_criteria(&mkdm(&json!({
            "mtx": [[1, 7], [2, 7]],
            "objectives": ["max", "max"],
        }))
        .unwrap());
        assert_eq!(
            uniform,
            vec![UniformCriterion {
                criterion: "C1".to_string(),
                value: 7.0
            }]
        );
    }
}
