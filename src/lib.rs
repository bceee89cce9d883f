//! MCDA Core - Multi-Criteria Decision Analysis data model
//!
//! This crate implements the decision matrix (alternatives x criteria with
//! objectives, weights and names), its validated construction, and the
//! contracts shared by the algorithms that normalize, weight and rank it.

pub mod config;
pub mod domain;

pub use domain::decision_maker::{DecisionMaker, Normalizer, Ranker, Weighter};
pub use domain::foundation::{DataError, Dtype, ErrorKind, Objective};
pub use domain::matrix::{mkdm, DecisionMatrix, DecisionMatrixBuilder, MatrixData};
