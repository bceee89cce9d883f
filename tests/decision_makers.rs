//! Integration tests for the decision maker contracts.
//!
//! Defines small algorithms outside the crate, the way downstream code does,
//! and runs them through the orchestration of each family.

use ndarray::Axis;
use serde_json::json;

use mcda_core::decision_maker;
use mcda_core::domain::decision_maker::{
    kind, validators, Correlation, Critic, DecisionMaker, EntropyWeighter, EqualWeighter,
    Evaluation, KernelResult, Normalizer, RankResult, Ranker, StdWeighter, ValueObject, Weighter,
};
use mcda_core::domain::foundation::{DataError, Dtype, Objective};
use mcda_core::domain::matrix::{mkdm, DecisionMatrix, DominanceAnalyzer, MatrixData};

// =============================================================================
// Test Infrastructure
// =============================================================================

decision_maker! {
    /// Divides every column by its sum.
    pub struct SumScaler {
        target: f64 = 1.0 => validators::positive,
    }
}

impl DecisionMaker for SumScaler {
    type Kind = kind::Normalizer;

    fn validate_data(&self, data: &MatrixData) -> Result<(), DataError> {
        if data.mtx.iter().any(|v| *v < 0.0) {
            return Err(DataError::invalid_parameter("mtx", "values must be non-negative"));
        }
        Ok(())
    }
}

impl Normalizer for SumScaler {
    fn normalize_data(&self, data: MatrixData) -> Result<MatrixData, DataError> {
        let sums = data.mtx.sum_axis(Axis(0));
        let mtx = &data.mtx / &sums * self.target;
        let columns = data.dtypes.len();

        let mut data = data.with_mtx(mtx);
        data.dtypes = vec![Dtype::Float64; columns];
        Ok(data)
    }
}

decision_maker! {
    /// Flips every minimized criterion into a maximized one.
    pub struct Inverter {}
}

impl DecisionMaker for Inverter {
    type Kind = kind::Normalizer;
}

impl Normalizer for Inverter {
    fn normalize_data(&self, mut data: MatrixData) -> Result<MatrixData, DataError> {
        for (mut column, objective) in data.mtx.axis_iter_mut(Axis(1)).zip(data.objectives.iter_mut()) {
            if *objective == Objective::Min.code() {
                column.mapv_inplace(|v| 1.0 / v);
                *objective = Objective::Max.code();
            }
        }
        data.dtypes = vec![Dtype::Float64; data.dtypes.len()];
        Ok(data)
    }
}

decision_maker! {
    /// Ranks by the weighted sum of a matrix whose criteria are all maximized.
    pub struct WeightedSum {}
}

impl DecisionMaker for WeightedSum {
    type Kind = kind::Ranker;

    fn validate_data(&self, data: &MatrixData) -> Result<(), DataError> {
        if data.objectives.iter().any(|o| *o != Objective::Max.code()) {
            return Err(DataError::invalid_parameter("objectives", "all criteria must be maximized"));
        }
        Ok(())
    }
}

impl Ranker for WeightedSum {
    type Output = RankResult;

    fn evaluate_data(&self, data: &MatrixData) -> Result<Evaluation<usize>, DataError> {
        let scores: Vec<f64> = data
            .mtx
            .rows()
            .into_iter()
            .map(|row| row.iter().zip(&data.weights).map(|(v, w)| v * w).sum())
            .collect();

        let ranks = scores
            .iter()
            .map(|s| 1 + scores.iter().filter(|other| *other > s).count())
            .collect();

        Ok(Evaluation::new(ranks).with_extra("score", scores))
    }
}

decision_maker! {
    /// Keeps the alternatives nobody dominates.
    pub struct Pareto {}
}

impl DecisionMaker for Pareto {
    type Kind = kind::Ranker;
}

impl Ranker for Pareto {
    type Output = KernelResult;

    fn evaluate_data(&self, data: &MatrixData) -> Result<Evaluation<bool>, DataError> {
        let dm = DecisionMatrix::from_data(data.clone())?;
        let dominated: Vec<String> = DominanceAnalyzer::find_dominated(&dm)
            .into_iter()
            .map(|d| d.alternative)
            .collect();

        Ok(Evaluation::new(
            data.anames.iter().map(|a| !dominated.contains(a)).collect(),
        ))
    }
}

fn cars() -> DecisionMatrix {
    mkdm(&json!({
        "mtx": [[20, 8, 4], [30, 9, 2], [25, 6, 5]],
        "objectives": ["min", "max", "min"],
        "weights": [2, 1, 1],
        "anames": ["compact", "sedan", "truck"],
        "cnames": ["price", "comfort", "consumption"],
    }))
    .unwrap()
}

// =============================================================================
// Normalizers
// =============================================================================

#[test]
fn normalizer_produces_new_matrix_and_keeps_source() {
    let dm = cars();
    let normalized = SumScaler::default().normalize(&dm).unwrap();

    assert_eq!(normalized.mtx().sum_axis(Axis(0)).to_vec(), vec![1.0, 1.0, 1.0]);
    assert_eq!(normalized.objectives(), dm.objectives());
    assert_eq!(normalized.weights(), dm.weights());
    assert_eq!(normalized.anames(), dm.anames());
    assert_eq!(normalized.cnames(), dm.cnames());
    assert_eq!(normalized.dtypes(), &[Dtype::Float64; 3]);

    assert_eq!(dm, cars());
}

#[test]
fn normalizer_validation_rejects_before_compute() {
    let negative = mkdm(&json!({"mtx": [[-1, 2], [3, 4]], "objectives": ["max", "max"]})).unwrap();
    assert!(matches!(
        SumScaler::default().normalize(&negative).unwrap_err(),
        DataError::InvalidParameter { field: "mtx", .. }
    ));
}

#[test]
fn normalizer_output_is_revalidated() {
    decision_maker! {
        struct DropColumn {}
    }

    impl DecisionMaker for DropColumn {
        type Kind = kind::Normalizer;
    }

    impl Normalizer for DropColumn {
        fn normalize_data(&self, mut data: MatrixData) -> Result<MatrixData, DataError> {
            data.mtx = data.mtx.select(Axis(1), &[0]);
            Ok(data)
        }
    }

    assert_eq!(
        DropColumn::default().normalize(&cars()).unwrap_err(),
        DataError::cardinality("objectives", 1, 3)
    );
}

#[test]
fn normalizers_chain() {
    let dm = cars();
    let inverted = Inverter::default().normalize(&dm).unwrap();
    let scaled = SumScaler::default().normalize(&inverted).unwrap();

    assert!(scaled.objectives().iter().all(Objective::is_max));
    assert!((scaled.mtx()[[0, 0]] - (1.0 / 20.0) / (1.0 / 20.0 + 1.0 / 30.0 + 1.0 / 25.0)).abs() < 1e-12);
}

// =============================================================================
// Weighters and rankers
// =============================================================================

#[test]
fn equal_weighter_then_rank() {
    let dm = cars();
    let prepared = SumScaler::default()
        .normalize(&Inverter::default().normalize(&dm).unwrap())
        .unwrap();
    let weighted = EqualWeighter::default().weight(&prepared).unwrap();

    let expected = 1.0 / 3.0;
    assert_eq!(weighted.weights(), &[expected; 3]);

    let rank = WeightedSum::default().evaluate(&weighted).unwrap();
    assert_eq!(rank.method(), "WeightedSum");
    assert_eq!(rank.len(), 3);
    assert_eq!(rank.ordered_alternatives(), vec!["sedan", "compact", "truck"]);
}

#[test]
fn ranker_validation_applies() {
    assert!(matches!(
        WeightedSum::default().evaluate(&cars()).unwrap_err(),
        DataError::InvalidParameter { field: "objectives", .. }
    ));
}

#[test]
fn std_weighter_sums_to_one() {
    let weighted = StdWeighter::default().weight(&cars()).unwrap();
    let total: f64 = weighted.weights().iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert!(weighted.weights()[0] > weighted.weights()[1]);
}

#[test]
fn objective_weighters_keep_everything_but_weights() {
    let dm = cars();
    for weighted in [
        EntropyWeighter::default().weight(&dm).unwrap(),
        Critic::new(Correlation::Spearman, true).unwrap().weight(&dm).unwrap(),
    ] {
        let total: f64 = weighted.weights().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(weighted.mtx(), dm.mtx());
        assert_eq!(weighted.objectives(), dm.objectives());
        assert_eq!(weighted.anames(), dm.anames());
    }
}

#[test]
fn critic_rejects_unknown_correlation_name() {
    assert!(matches!(
        Critic::with_correlation("kendall", false).unwrap_err(),
        DataError::InvalidParameter { field: "correlation", .. }
    ));
}

#[test]
fn kernel_keeps_non_dominated_alternatives() {
    let dm = mkdm(&json!({
        "mtx": [[1, 1], [2, 2], [3, 0]],
        "objectives": ["max", "max"],
    }))
    .unwrap();

    let kernel = Pareto::default().evaluate(&dm).unwrap();
    assert_eq!(kernel.values(), &[false, true, true]);
    assert_eq!(kernel.kernel_where(), vec![1, 2]);
    assert!(kernel.to_string().ends_with("[Method: Pareto]"));
}

// =============================================================================
// Value objects
// =============================================================================

#[test]
fn generated_value_object_behavior() {
    let scaler = SumScaler::new(100.0).unwrap();

    assert_eq!(*scaler.target(), 100.0);
    assert_eq!(scaler.to_string(), "SumScaler(target=100.0)");
    assert_eq!(SumScaler::NAME, "SumScaler");
    assert_eq!(scaler, scaler.clone());
    assert_ne!(scaler, SumScaler::default());
    assert!(SumScaler::new(-1.0).is_err());
    assert_eq!(scaler.capability(), "normalizer");
    assert_eq!(WeightedSum::default().capability(), "ranker");
    assert_eq!(EqualWeighter::default().capability(), "weighter");
}
