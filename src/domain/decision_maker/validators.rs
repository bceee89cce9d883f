//! Field validators for `decision_maker!` declarations.

use crate::domain::foundation::DataError;

/// Value must be finite and strictly greater than zero.
pub fn positive(field: &'static str, value: &f64) -> Result<(), DataError> {
    if value.is_finite() && *value > 0.0 {
        Ok(())
    } else {
        Err(DataError::invalid_parameter(
            field,
            format!("must be a positive number, got {}", value),
        ))
    }
}

/// Value must be finite and not negative.
pub fn non_negative(field: &'static str, value: &f64) -> Result<(), DataError> {
    if value.is_finite() && *value >= 0.0 {
        Ok(())
    } else {
        Err(DataError::invalid_parameter(
            field,
            format!("must be zero or positive, got {}", value),
        ))
    }
}

/// Value must lie in `[0, 1]`.
pub fn unit_interval(field: &'static str, value: &f64) -> Result<(), DataError> {
    if (0.0..=1.0).contains(value) {
        Ok(())
    } else {
        Err(DataError::invalid_parameter(
            field,
            format!("must be between 0 and 1, got {}", value),
        ))
    }
}
