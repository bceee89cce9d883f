//! Ranker family: algorithms that evaluate the alternatives of a matrix.

use tracing::debug;

use crate::domain::foundation::DataError;
use crate::domain::matrix::{DecisionMatrix, MatrixData};

use super::{kind, DecisionMaker, Evaluation, EvaluationResult, ValueObject};

/// An algorithm that ranks or selects alternatives.
pub trait Ranker: DecisionMaker<Kind = kind::Ranker> {
    /// Result type built from the evaluation, e.g. a ranking or a kernel.
    type Output: EvaluationResult;

    /// Computes one value per alternative plus any extra information.
    fn evaluate_data(
        &self,
        data: &MatrixData,
    ) -> Result<Evaluation<<Self::Output as EvaluationResult>::Value>, DataError>;

    /// Validates the matrix, evaluates it and attaches the values to the
    /// alternatives under this decision maker's name.
    fn evaluate(&self, dm: &DecisionMatrix) -> Result<Self::Output, DataError> {
        let data = dm.to_data();
        self.validate_data(&data)?;

        let evaluation = self.evaluate_data(&data)?;
        let result = Self::Output::from_evaluation(<Self as ValueObject>::NAME, data.anames, evaluation)?;

        debug!(
            decision_maker = <Self as ValueObject>::NAME,
            alternatives = dm.alternative_count(),
            "Alternatives evaluated"
        );

        Ok(result)
    }
}
