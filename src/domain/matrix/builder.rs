//! Construction entrypoint: validates heterogeneous raw inputs into a
//! [`DecisionMatrix`].

use ndarray::{Array, ArrayD, Dimension, Ix2};
use serde_json::Value;
use tracing::debug;

use crate::domain::foundation::{DataError, Dtype};

use super::decision_matrix::Parts;
use super::raw;
use super::DecisionMatrix;

/// Names accepted by [`mkdm`].
const INPUT_NAMES: &[&str] = &["mtx", "objectives", "weights", "anames", "cnames", "dtypes"];

#[derive(Debug, Clone)]
enum MatrixSource {
    Raw(Value),
    Array(ArrayD<f64>),
}

#[derive(Debug, Clone)]
enum WeightSource {
    Raw(Value),
    Values(Vec<f64>),
}

/// Builder for constructing validated DecisionMatrix instances.
///
/// `mtx` and `objectives` are required; everything else falls back to a
/// default (all-ones weights, `A{i}` / `C{j}` names, dtypes derived from the
/// matrix). An explicit JSON `null` for an optional input means "use the
/// default".
#[derive(Debug, Clone, Default)]
pub struct DecisionMatrixBuilder {
    mtx: Option<MatrixSource>,
    objectives: Option<Value>,
    weights: Option<WeightSource>,
    anames: Option<Value>,
    cnames: Option<Value>,
    dtypes: Option<Vec<Dtype>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled with every field of an existing matrix.
    pub(crate) fn from_matrix(dm: &DecisionMatrix) -> Self {
        Self {
            mtx: Some(MatrixSource::Array(dm.mtx().clone().into_dyn())),
            objectives: Some(Value::from(dm.objectives().to_vec())),
            weights: Some(WeightSource::Values(dm.weights().to_vec())),
            anames: Some(Value::from(dm.anames().to_vec())),
            cnames: Some(Value::from(dm.cnames().to_vec())),
            dtypes: Some(dm.dtypes().to_vec()),
        }
    }

    /// Sets the matrix from a nested array-like (rows of criterion values).
    pub fn mtx(mut self, mtx: impl Into<Value>) -> Self {
        self.mtx = Some(MatrixSource::Raw(mtx.into()));
        self
    }

    /// Sets the matrix from an ndarray of any dimensionality; only 2-D
    /// arrays pass validation.
    pub fn mtx_array<D: Dimension>(mut self, mtx: Array<f64, D>) -> Self {
        self.mtx = Some(MatrixSource::Array(mtx.into_dyn()));
        self
    }

    /// Sets the objectives; every entry must be an objective alias.
    pub fn objectives(mut self, objectives: impl Into<Value>) -> Self {
        self.objectives = Some(objectives.into());
        self
    }

    /// Sets the weights from an array-like of numbers or numeric strings.
    pub fn weights(mut self, weights: impl Into<Value>) -> Self {
        self.weights = Some(WeightSource::Raw(weights.into()));
        self
    }

    /// Sets the weights from already numeric values.
    pub fn weight_values(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.weights = Some(WeightSource::Values(weights.into_iter().collect()));
        self
    }

    /// Sets the alternative names.
    pub fn anames(mut self, anames: impl Into<Value>) -> Self {
        self.anames = Some(anames.into());
        self
    }

    /// Sets the criterion names.
    pub fn cnames(mut self, cnames: impl Into<Value>) -> Self {
        self.cnames = Some(cnames.into());
        self
    }

    /// Forces a dtype per criterion instead of deriving it from the matrix.
    pub fn dtypes(mut self, dtypes: impl IntoIterator<Item = Dtype>) -> Self {
        self.dtypes = Some(dtypes.into_iter().collect());
        self
    }

    /// Validates every input and builds the decision matrix.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredInput` if `mtx` or `objectives` was never set
    /// - `Shape` / `Ragged` if the matrix is not a rectangular 2-D array
    /// - `InvalidObjective` if an objective is not a known alias
    /// - `InvalidWeight` if a weight is not numeric
    /// - `CardinalityMismatch` if objectives, weights, names or dtypes do not
    ///   match the matrix dimensions
    pub fn build(self) -> Result<DecisionMatrix, DataError> {
        let mtx = self
            .mtx
            .filter(|m| !matches!(m, MatrixSource::Raw(Value::Null)))
            .ok_or_else(|| DataError::missing("mtx"))?;
        let objectives = self
            .objectives
            .filter(|v| !v.is_null())
            .ok_or_else(|| DataError::missing("objectives"))?;

        let (mtx, derived_dtypes) = match mtx {
            MatrixSource::Raw(value) => raw::coerce_matrix(&value)?,
            MatrixSource::Array(array) => {
                let ndim = array.ndim();
                let mtx = array
                    .into_dimensionality::<Ix2>()
                    .map_err(|_| DataError::Shape { field: "mtx", ndim })?;
                let columns = mtx.ncols();
                (mtx, vec![Dtype::Float64; columns])
            }
        };

        let objectives = raw::coerce_objectives(&objectives)?;

        let weights = match self.weights {
            Some(WeightSource::Raw(value)) if !value.is_null() => Some(raw::coerce_weights(&value)?),
            Some(WeightSource::Values(values)) => Some(values),
            _ => None,
        };

        let anames = self
            .anames
            .filter(|v| !v.is_null())
            .map(|v| raw::coerce_names(&v));
        let cnames = self
            .cnames
            .filter(|v| !v.is_null())
            .map(|v| raw::coerce_names(&v));

        let dm = DecisionMatrix::assemble(Parts {
            mtx,
            objectives,
            weights,
            anames,
            cnames,
            dtypes: self.dtypes,
            derived_dtypes,
        })?;

        debug!(
            alternatives = dm.alternative_count(),
            criteria = dm.criteria_count(),
            "Decision matrix constructed"
        );

        Ok(dm)
    }
}

/// Makes a decision matrix from named raw inputs.
///
/// `args` is a JSON object with the keys `mtx`, `objectives` (required),
/// `weights`, `anames`, `cnames` and `dtypes` (optional). Unknown keys are
/// rejected.
///
/// ```
/// use mcda_core::domain::matrix::mkdm;
/// use serde_json::json;
///
/// let dm = mkdm(&json!({
///     "mtx": [[1, 2, 3], [4, 5, 6]],
///     "objectives": ["min", "max", "min"],
///     "weights": [1, 1, 1],
/// }))
/// .unwrap();
///
/// assert_eq!(dm.shape(), (2, 3));
/// ```
pub fn mkdm(args: &Value) -> Result<DecisionMatrix, DataError> {
    let Value::Object(fields) = args else {
        return Err(DataError::invalid_parameter(
            "args",
            "expected an object of named inputs",
        ));
    };

    if let Some(unknown) = fields.keys().find(|k| !INPUT_NAMES.contains(&k.as_str())) {
        return Err(DataError::UnexpectedInput {
            field: unknown.clone(),
        });
    }

    let mut builder = DecisionMatrixBuilder::new();
    if let Some(mtx) = fields.get("mtx") {
        builder = builder.mtx(mtx.clone());
    }
    if let Some(objectives) = fields.get("objectives") {
        builder = builder.objectives(objectives.clone());
    }
    if let Some(weights) = fields.get("weights") {
        builder = builder.weights(weights.clone());
    }
    if let Some(anames) = fields.get("anames") {
        builder = builder.anames(anames.clone());
    }
    if let Some(cnames) = fields.get("cnames") {
        builder = builder.cnames(cnames.clone());
    }
    if let Some(dtypes) = fields.get("dtypes").filter(|v| !v.is_null()) {
        let dtypes: Vec<Dtype> = serde_json::from_value(dtypes.clone())
            .map_err(|e| DataError::invalid_parameter("dtypes", e.to_string()))?;
        builder = builder.dtypes(dtypes);
    }

    builder.build()
}

impl TryFrom<&Value> for DecisionMatrix {
    type Error = DataError;

    fn try_from(args: &Value) -> Result<Self, Self::Error> {
        mkdm(args)
    }
}
