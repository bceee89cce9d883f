//! Domain layer containing the decision analysis data model and contracts.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (objectives, dtypes, errors)
//! - `matrix` - Decision matrix construction, views and dominance analysis
//! - `decision_maker` - Capability kinds and the algorithm family contracts

pub mod decision_maker;
pub mod foundation;
pub mod matrix;
