//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while building or transforming a decision matrix.
///
/// Every failure is reported at the point of detection; a matrix is either
/// fully valid or never constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Missing required input '{field}'")]
    MissingRequiredInput { field: &'static str },

    #[error("Unexpected input '{field}'")]
    UnexpectedInput { field: String },

    #[error("'{field}' must have 2 dimensions, found {ndim} instead")]
    Shape { field: &'static str, ndim: usize },

    #[error("'{field}' is not rectangular: row {row} has {actual} elements, expected {expected}")]
    Ragged {
        field: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("'{field}' must have {expected} elements, found {actual}")]
    CardinalityMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid objective alias: {alias}")]
    InvalidObjective { alias: String },

    #[error("Weight at position {index} is not numeric: {value}")]
    InvalidWeight { index: usize, value: String },

    #[error("Matrix value at [{row}, {column}] is not numeric: {value}")]
    NonNumericValue {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Unknown alternative '{0}'")]
    UnknownAlternative(String),

    #[error("Unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("Parameter '{field}' is invalid: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("The data {values:?} doesn't look like a ranking")]
    InvalidRanking { values: Vec<usize> },
}

/// Coarse classification separating malformed argument sets from bad values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was never supplied, or an unknown one was.
    Arguments,
    /// An argument was supplied but failed validation.
    InvalidValue,
}

impl DataError {
    /// Creates a missing required input error.
    pub fn missing(field: &'static str) -> Self {
        DataError::MissingRequiredInput { field }
    }

    /// Creates a cardinality mismatch error.
    pub fn cardinality(field: &'static str, expected: usize, actual: usize) -> Self {
        DataError::CardinalityMismatch {
            field,
            expected,
            actual,
        }
    }

    /// Creates an invalid objective error from any displayable alias.
    pub fn invalid_objective(alias: impl fmt::Display) -> Self {
        DataError::InvalidObjective {
            alias: alias.to_string(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        DataError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Returns whether this is a missing-input or an invalid-value failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataError::MissingRequiredInput { .. } | DataError::UnexpectedInput { .. } => {
                ErrorKind::Arguments
            }
            _ => ErrorKind::InvalidValue,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            DataError::MissingRequiredInput { .. } => ErrorCode::MissingRequiredInput,
            DataError::UnexpectedInput { .. } => ErrorCode::UnexpectedInput,
            DataError::Shape { .. } | DataError::Ragged { .. } => ErrorCode::ShapeError,
            DataError::CardinalityMismatch { .. } => ErrorCode::CardinalityMismatch,
            DataError::InvalidObjective { .. } => ErrorCode::InvalidObjective,
            DataError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            DataError::NonNumericValue { .. } => ErrorCode::NonNumericValue,
            DataError::UnknownAlternative(_) | DataError::UnknownCriterion(_) => {
                ErrorCode::UnknownLabel
            }
            DataError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            DataError::InvalidRanking { .. } => ErrorCode::InvalidResult,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Argument errors
    MissingRequiredInput,
    UnexpectedInput,

    // Validation errors
    ShapeError,
    CardinalityMismatch,
    InvalidObjective,
    InvalidWeight,
    NonNumericValue,

    // Lookup errors
    UnknownLabel,

    // Decision maker errors
    InvalidParameter,
    InvalidResult,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingRequiredInput => "MISSING_REQUIRED_INPUT",
            ErrorCode::UnexpectedInput => "UNEXPECTED_INPUT",
            ErrorCode::ShapeError => "SHAPE_ERROR",
            ErrorCode::CardinalityMismatch => "CARDINALITY_MISMATCH",
            ErrorCode::InvalidObjective => "INVALID_OBJECTIVE",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::NonNumericValue => "NON_NUMERIC_VALUE",
            ErrorCode::UnknownLabel => "UNKNOWN_LABEL",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::InvalidResult => "INVALID_RESULT",
        };
        write!(f, "{}", s)
    }
}
