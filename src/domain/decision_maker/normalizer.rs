//! Normalizer contract: extract fields, validate, compute, rebuild.

use tracing::debug;

use crate::domain::foundation::DataError;
use crate::domain::matrix::{DecisionMatrix, MatrixData};

use super::{kind, DecisionMaker, ValueObject};

/// An algorithm that maps one decision matrix to a new one.
///
/// Implementors provide [`normalize_data`](Normalizer::normalize_data); the
/// orchestration in [`normalize`](Normalizer::normalize) always runs
/// `validate_data` first and rebuilds the result through the same validation
/// as every other construction path.
pub trait Normalizer: DecisionMaker<Kind = kind::Normalizer> {
    /// Computes the new fields. Any field may be passed through unchanged.
    fn normalize_data(&self, data: MatrixData) -> Result<MatrixData, DataError>;

    /// Normalizes a decision matrix into a brand-new one; `dm` is untouched.
    ///
    /// # Errors
    ///
    /// Whatever `validate_data` or `normalize_data` reports, or any
    /// construction failure of the returned fields.
    fn normalize(&self, dm: &DecisionMatrix) -> Result<DecisionMatrix, DataError> {
        let data = dm.to_data();
        self.validate_data(&data)?;

        let normalized = DecisionMatrix::from_data(self.normalize_data(data)?)?;

        debug!(
            decision_maker = <Self as ValueObject>::NAME,
            alternatives = normalized.alternative_count(),
            criteria = normalized.criteria_count(),
            "Decision matrix normalized"
        );

        Ok(normalized)
    }
}
