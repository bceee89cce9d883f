//! Decision maker module - Base contracts for algorithm families.
//!
//! # Components
//!
//! - `DecisionMaker` - Base trait; every implementation declares a capability kind
//! - `decision_maker!` - Generates value-object behavior from a field list
//! - `Normalizer` / `Weighter` / `Ranker` - Family contracts with orchestration
//! - `RankResult` / `KernelResult` - Evaluation results

#[macro_use]
mod macros;

mod base;
mod normalizer;
mod ranker;
mod result;
mod weighter;
pub mod validators;

pub use base::{kind, CapabilityKind, DecisionMaker, ValueObject};
pub use normalizer::Normalizer;
pub use ranker::Ranker;
pub use result::{Evaluation, EvaluationResult, Extra, KernelResult, RankResult};
pub use weighter::{Correlation, Critic, EntropyWeighter, EqualWeighter, StdWeighter, Weighter};
