//! Decision Matrix module - the alternatives x criteria data model.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated, immutable matrix with objectives, weights and names
//! - `DecisionMatrixBuilder` / `mkdm` - Construction entrypoints over raw inputs
//! - `MatrixData` - Explicit field record exchanged with algorithms
//! - `Table` - Structured export with objectives and weights rows
//! - `Summary` - Per-criterion descriptive statistics
//! - `DominanceAnalyzer` - Pairwise dominance between alternatives

mod builder;
mod data;
mod decision_matrix;
mod dominance;
mod raw;
pub(crate) mod render;
mod summary;
mod table;

pub use builder::{mkdm, DecisionMatrixBuilder};
pub use data::MatrixData;
pub use decision_matrix::{DecisionMatrix, Tolerance};
pub use dominance::{DominanceAnalyzer, DominatedAlternative, UniformCriterion};
pub use render::{render_html, render_text, RenderOptions};
pub use summary::{CriterionSummary, Summary, SUMMARY_ROWS};
pub use table::{Table, TableCell, OBJECTIVES_ROW, WEIGHTS_ROW};
