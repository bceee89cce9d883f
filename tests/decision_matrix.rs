//! Integration tests for decision matrix construction and views.
//!
//! Covers the construction entrypoint end to end:
//! 1. Valid inputs round-trip into the matrix fields
//! 2. Optional inputs fall back to their defaults
//! 3. Copies are independent and equal by value
//! 4. Text, markup and table views
//! 5. Every failure mode, classified by kind

use ndarray::{Array2, Array3};
use proptest::prelude::*;
use serde_json::{json, Value};

use mcda_core::config::McdaConfig;
use mcda_core::domain::foundation::{DataError, Dtype, ErrorCode, ErrorKind, Objective};
use mcda_core::domain::matrix::{mkdm, DecisionMatrix, TableCell, OBJECTIVES_ROW, WEIGHTS_ROW};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Inputs for a 3 x 4 matrix with explicit names.
fn sample_args() -> Value {
    json!({
        "mtx": [[1.5, 2, 3, 4], [5, 6, 7.25, 8], [9, 10, 11, 12]],
        "objectives": ["min", "max", "<", "+"],
        "weights": [0.1, 0.2, 0.3, 0.4],
        "anames": ["first", "second", "third"],
        "cnames": ["price", "speed", "noise", "comfort"],
    })
}

/// Sample inputs with one field replaced.
fn with(field: &str, value: Value) -> Value {
    let mut args = sample_args();
    args[field] = value;
    args
}

/// Sample inputs with one field removed.
fn without(field: &str) -> Value {
    let mut args = sample_args();
    if let Value::Object(map) = &mut args {
        map.remove(field);
    }
    args
}

fn reference() -> DecisionMatrix {
    mkdm(&json!({
        "mtx": [[1, 2, 3], [4, 5, 6], [7, 8, 9]],
        "objectives": ["min", "max", "min"],
        "weights": [0.1, 0.2, 0.3],
    }))
    .unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn simple_creation_keeps_every_field() {
    let dm = mkdm(&sample_args()).unwrap();

    assert_eq!(dm.shape(), (3, 4));
    assert_eq!(dm.mtx()[[0, 0]], 1.5);
    assert_eq!(dm.mtx()[[1, 2]], 7.25);
    assert_eq!(
        dm.objectives(),
        &[Objective::Min, Objective::Max, Objective::Min, Objective::Max]
    );
    assert_eq!(dm.objectives_values(), vec![-1, 1, -1, 1]);
    assert_eq!(dm.weights(), &[0.1, 0.2, 0.3, 0.4]);
    assert_eq!(dm.anames(), &["first", "second", "third"]);
    assert_eq!(dm.cnames(), &["price", "speed", "noise", "comfort"]);
    assert_eq!(
        dm.dtypes(),
        &[Dtype::Float64, Dtype::Int64, Dtype::Float64, Dtype::Int64]
    );
}

#[test]
fn no_weights_default_to_ones() {
    let dm = mkdm(&without("weights")).unwrap();
    assert_eq!(dm.weights(), &[1.0; 4]);
}

#[test]
fn no_names_default_to_positional_labels() {
    let mut args = without("anames");
    if let Value::Object(map) = &mut args {
        map.remove("cnames");
    }
    let dm = mkdm(&args).unwrap();

    assert_eq!(dm.anames(), &["A0", "A1", "A2"]);
    assert_eq!(dm.cnames(), &["C0", "C1", "C2", "C3"]);
}

#[test]
fn objectives_accept_mixed_aliases() {
    let dm = mkdm(&with("objectives", json!([-1, "MAXIMIZE", " <= ", "\u{25b2}"]))).unwrap();
    assert_eq!(dm.objectives_values(), vec![-1, 1, -1, 1]);
}

#[test]
fn objectives_accept_integral_float_codes() {
    let dm = mkdm(&with("objectives", json!([-1.0, 1.0, 1, -1]))).unwrap();
    assert_eq!(dm.objectives_values(), vec![-1, 1, 1, -1]);
}

#[test]
fn copy_is_equal_and_independent() {
    let dm = mkdm(&sample_args()).unwrap();
    let copy = dm.copy();

    assert!(!std::ptr::eq(&dm, &copy));
    assert_eq!(dm, copy);

    let mut data = copy.into_data();
    data.mtx[[0, 0]] = 99.0;
    let changed = DecisionMatrix::from_data(data).unwrap();

    assert_eq!(dm.mtx()[[0, 0]], 1.5);
    assert_ne!(dm, changed);
}

#[test]
fn copy_with_overrides() {
    let dm = mkdm(&sample_args()).unwrap();
    let reweighted = dm.to_builder().weights(vec![1, 1, 1, 1]).build().unwrap();

    assert_eq!(reweighted.weights(), &[1.0; 4]);
    assert_eq!(reweighted.mtx(), dm.mtx());
    assert_eq!(reweighted.cnames(), dm.cnames());
}

#[test]
fn self_equality_and_value_inequality() {
    let dm = mkdm(&sample_args()).unwrap();
    let same = &dm;
    assert!(same == &dm);

    let other = mkdm(&with("mtx", json!([[0, 2, 3, 4], [5, 6, 7.25, 8], [9, 10, 11, 12]]))).unwrap();
    assert_ne!(dm, other);

    let renamed = mkdm(&with("anames", json!(["x", "second", "third"]))).unwrap();
    assert_ne!(dm, renamed);
}

#[test]
fn try_from_value() {
    let args = sample_args();
    let dm = DecisionMatrix::try_from(&args).unwrap();
    assert_eq!(dm, mkdm(&args).unwrap());
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn text_view_is_byte_exact() {
    assert_eq!(
        reference().to_string(),
        "   C0[\u{25bc} 0.1] C1[\u{25b2} 0.2] C2[\u{25bc} 0.3]\n\
         A0         1         2         3\n\
         A1         4         5         6\n\
         A2         7         8         9\n\
         [3 Alternatives x 3 Criteria]"
    );
}

#[test]
fn text_view_follows_display_config() {
    let mut config = McdaConfig::default();
    config.display.float_precision = 2;

    let dm = mkdm(&json!({"mtx": [[0.123, 1]], "objectives": ["max", "min"]})).unwrap();
    let text = dm.render_text(&config.display.render_options());

    assert!(text.starts_with("   C0[\u{25b2} 1.0] C1[\u{25bc} 1.0]\nA0      0.12"), "{}", text);
}

#[test]
fn markup_view_reports_dimensions() {
    let html = reference().to_html();
    assert!(html.starts_with("<div class='decisionmatrix'>"));
    assert!(html.contains("<th>C1[\u{25b2} 0.2]</th>"));
    assert!(html.contains("<em class='decisionmatrix-dim'>3 Alternatives x 3 Criteria</em>"));
}

#[test]
fn table_view_prepends_objectives_and_weights() {
    let table = reference().to_table();

    assert_eq!(table.index, vec!["objectives", "weights", "A0", "A1", "A2"]);
    assert_eq!(table.columns, vec!["C0", "C1", "C2"]);
    assert_eq!(
        table.row(OBJECTIVES_ROW).unwrap(),
        &[
            TableCell::Objective(Objective::Min),
            TableCell::Objective(Objective::Max),
            TableCell::Objective(Objective::Min),
        ]
    );
    assert_eq!(
        table.row(WEIGHTS_ROW).unwrap(),
        &[TableCell::Weight(0.1), TableCell::Weight(0.2), TableCell::Weight(0.3)]
    );
    assert_eq!(
        table.row("A2").unwrap(),
        &[TableCell::Int(7), TableCell::Int(8), TableCell::Int(9)]
    );
}

#[test]
fn aequals_uses_configured_tolerance() {
    let dm = reference();
    let nudged = dm
        .to_builder()
        .weights(vec![0.1 + 1e-7, 0.2, 0.3])
        .build()
        .unwrap();

    assert_ne!(dm, nudged);
    assert!(dm.aequals_with(&nudged, &McdaConfig::default().comparison.tolerance()));
    assert!(!dm.aequals(&nudged, 0.0, 1e-9, false));
}

#[test]
fn describe_summarizes_each_criterion() {
    let summary = reference().describe();

    assert_eq!(summary.criteria().len(), 3);
    let c1 = summary.criterion("C1").unwrap();
    assert_eq!((c1.count, c1.mean, c1.min, c1.max), (3, 5.0, 2.0, 8.0));
    assert_eq!((c1.q1, c1.median, c1.q3), (3.5, 5.0, 6.5));
    assert!(summary.to_string().starts_with("       C0  C1  C2\ncount 3.0 3.0 3.0"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_mtx_is_an_argument_error() {
    let err = mkdm(&without("mtx")).unwrap_err();
    assert_eq!(err, DataError::missing("mtx"));
    assert_eq!(err.kind(), ErrorKind::Arguments);
    assert_eq!(err.code().to_string(), "MISSING_REQUIRED_INPUT");
}

#[test]
fn misspelled_mtx_is_an_argument_error() {
    let mut args = without("mtx");
    args["mtxt"] = json!([[1, 2, 3, 4]]);
    let err = mkdm(&args).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Arguments);
}

#[test]
fn missing_objectives_is_an_argument_error() {
    let err = mkdm(&without("objectives")).unwrap_err();
    assert_eq!(err, DataError::missing("objectives"));
    assert_eq!(err.kind(), ErrorKind::Arguments);
}

#[test]
fn one_dimensional_mtx_fails() {
    let err = mkdm(&with("mtx", json!([1, 2, 3, 4]))).unwrap_err();
    assert_eq!(err, DataError::Shape { field: "mtx", ndim: 1 });
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn three_dimensional_mtx_fails() {
    let err = mkdm(&with("mtx", json!([[[1, 2, 3, 4]]]))).unwrap_err();
    assert_eq!(err, DataError::Shape { field: "mtx", ndim: 3 });

    let err = DecisionMatrix::builder()
        .mtx_array(Array3::<f64>::zeros((2, 2, 2)))
        .objectives(vec!["min", "max"])
        .build()
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ShapeError);
}

#[test]
fn invalid_objective_fails() {
    let err = mkdm(&with("objectives", json!([1, 2, 3, 4]))).unwrap_err();
    assert_eq!(err, DataError::invalid_objective(2));
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn non_numeric_weight_fails() {
    let err = mkdm(&with("weights", json!(["hola"]))).unwrap_err();
    assert!(matches!(err, DataError::InvalidWeight { index: 0, .. }));
}

#[test]
fn each_truncated_list_is_a_cardinality_mismatch() {
    let cases = [
        ("objectives", json!(["max", "<", "+"]), 4),
        ("weights", json!([0.2, 0.3, 0.4]), 4),
        ("anames", json!(["second", "third"]), 3),
        ("cnames", json!(["speed", "noise", "comfort"]), 4),
    ];

    for (field, truncated, expected) in cases {
        let err = mkdm(&with(field, truncated)).unwrap_err();
        assert_eq!(
            err,
            DataError::cardinality(field, expected, expected - 1),
            "{}",
            field
        );
    }
}

// =============================================================================
// Properties
// =============================================================================

/// Matrix values with matching objectives, weights and names.
fn arb_inputs() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<bool>, Vec<f64>)> {
    (1usize..6, 1usize..5).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(prop::collection::vec(-1e6f64..1e6, cols), rows),
            prop::collection::vec(any::<bool>(), cols),
            prop::collection::vec(0.0f64..10.0, cols),
        )
    })
}

proptest! {
    #[test]
    fn construction_round_trips((mtx, maximize, weights) in arb_inputs()) {
        let objectives: Vec<&str> = maximize.iter().map(|m| if *m { "max" } else { "min" }).collect();
        let anames: Vec<String> = (0..mtx.len()).map(|i| format!("alt-{}", i)).collect();

        let dm = mkdm(&json!({
            "mtx": mtx,
            "objectives": objectives,
            "weights": weights,
            "anames": anames,
        }))
        .unwrap();

        let (rows, cols) = (mtx.len(), mtx[0].len());
        let flat: Vec<f64> = mtx.iter().flatten().copied().collect();
        prop_assert_eq!(dm.mtx(), &Array2::from_shape_vec((rows, cols), flat).unwrap());
        prop_assert_eq!(dm.weights(), weights.as_slice());
        prop_assert_eq!(dm.anames(), anames.as_slice());
        prop_assert_eq!(dm.maxwhere(), maximize);
        prop_assert_eq!(dm.cnames().len(), cols);
    }

    #[test]
    fn default_weights_and_names_follow_shape(rows in 1usize..8, cols in 1usize..8) {
        let dm = DecisionMatrix::builder()
            .mtx_array(Array2::<f64>::zeros((rows, cols)))
            .objectives(vec![1; cols])
            .build()
            .unwrap();

        let ones = vec![1.0; cols];
        prop_assert_eq!(dm.weights(), ones.as_slice());
        prop_assert_eq!(dm.anames().last().cloned(), Some(format!("A{}", rows - 1)));
        prop_assert_eq!(dm.cnames().last().cloned(), Some(format!("C{}", cols - 1)));
    }
}
