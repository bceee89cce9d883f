//! Foundation module - Shared domain primitives.
//!
//! Contains the objective enumeration, column dtypes, and the error types
//! that form the vocabulary of the decision analysis domain.

mod dtype;
mod errors;
mod objective;

pub use dtype::Dtype;
pub use errors::{DataError, ErrorCode, ErrorKind};
pub use objective::{Objective, MAX_ALIASES, MIN_ALIASES};
