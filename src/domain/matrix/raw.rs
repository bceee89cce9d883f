//! Coercion of loosely typed inputs into validated matrix components.
//!
//! Raw inputs arrive as `serde_json::Value` "array-likes": nested arrays for
//! the matrix, flat arrays (or a lone scalar) for the per-criterion and
//! per-alternative sequences.

use ndarray::Array2;
use serde_json::Value;

use crate::domain::foundation::{DataError, Dtype, Objective};

/// Number of array nesting levels, following the first element at each level.
pub(crate) fn ndim(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.first().map(ndim).unwrap_or(0),
        _ => 0,
    }
}

/// Coerces a nested array into a 2-D numeric matrix and the dtype derived
/// for each of its columns.
///
/// `null` cells become NaN. A column is `Int64` only when every cell in it is
/// an integer literal.
pub(crate) fn coerce_matrix(value: &Value) -> Result<(Array2<f64>, Vec<Dtype>), DataError> {
    let dims = ndim(value);
    if dims != 2 {
        return Err(DataError::Shape { field: "mtx", ndim: dims });
    }
    let Value::Array(rows) = value else {
        return Err(DataError::Shape { field: "mtx", ndim: dims });
    };

    let ncols = match rows.first() {
        Some(Value::Array(first)) => first.len(),
        _ => 0,
    };
    let mut cells = Vec::with_capacity(rows.len() * ncols);
    let mut integral = vec![true; ncols];

    for (i, row) in rows.iter().enumerate() {
        let row = match row {
            Value::Array(row) if row.len() == ncols => row,
            Value::Array(row) => {
                return Err(DataError::Ragged {
                    field: "mtx",
                    row: i,
                    expected: ncols,
                    actual: row.len(),
                })
            }
            _ => return Err(DataError::Shape { field: "mtx", ndim: 1 }),
        };

        for (j, cell) in row.iter().enumerate() {
            let number = match cell {
                Value::Number(n) => {
                    if !(n.is_i64() || n.is_u64()) {
                        integral[j] = false;
                    }
                    n.as_f64().unwrap_or(f64::NAN)
                }
                Value::Null => {
                    integral[j] = false;
                    f64::NAN
                }
                Value::Array(_) => {
                    return Err(DataError::Shape {
                        field: "mtx",
                        ndim: 2 + ndim(cell),
                    })
                }
                other => {
                    return Err(DataError::NonNumericValue {
                        row: i,
                        column: j,
                        value: other.to_string(),
                    })
                }
            };
            cells.push(number);
        }
    }

    let mtx = Array2::from_shape_vec((rows.len(), ncols), cells).map_err(|_| {
        DataError::Shape {
            field: "mtx",
            ndim: dims,
        }
    })?;
    let dtypes = integral
        .into_iter()
        .map(|is_int| if is_int { Dtype::Int64 } else { Dtype::Float64 })
        .collect();

    Ok((mtx, dtypes))
}

/// Views an array-like as a sequence; a lone scalar is a one-element sequence.
pub(crate) fn as_sequence(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        scalar => vec![scalar],
    }
}

/// Resolves every entry through objective alias lookup.
pub(crate) fn coerce_objectives(value: &Value) -> Result<Vec<Objective>, DataError> {
    as_sequence(value)
        .into_iter()
        .map(Objective::construct_from_alias)
        .collect()
}

/// Converts every entry to `f64`. Numeric strings are parsed; anything else
/// non-numeric is rejected.
pub(crate) fn coerce_weights(value: &Value) -> Result<Vec<f64>, DataError> {
    as_sequence(value)
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let parsed = match item {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            parsed.ok_or_else(|| DataError::InvalidWeight {
                index,
                value: item.to_string(),
            })
        })
        .collect()
}

/// Converts every entry to a display name.
pub(crate) fn coerce_names(value: &Value) -> Vec<String> {
    as_sequence(value)
        .into_iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}
