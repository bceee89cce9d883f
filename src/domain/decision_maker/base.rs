//! DecisionMaker trait and capability kinds shared by every algorithm family.

use std::fmt;

use crate::domain::foundation::DataError;
use crate::domain::matrix::MatrixData;

/// Tag identifying an algorithm family.
///
/// Every [`DecisionMaker`] names its family through the associated `Kind`
/// type, so an implementation without a capability kind does not compile.
pub trait CapabilityKind: fmt::Debug + 'static {
    /// Stable family name, e.g. `"normalizer"`.
    const NAME: &'static str;
}

/// The capability kinds known to the crate.
pub mod kind {
    use super::CapabilityKind;

    /// Maps a decision matrix to a rescaled one.
    #[derive(Debug)]
    pub enum Normalizer {}

    /// Assigns weights to the criteria.
    #[derive(Debug)]
    pub enum Weighter {}

    /// Ranks or selects alternatives.
    #[derive(Debug)]
    pub enum Ranker {}

    impl CapabilityKind for Normalizer {
        const NAME: &'static str = "normalizer";
    }

    impl CapabilityKind for Weighter {
        const NAME: &'static str = "weighter";
    }

    impl CapabilityKind for Ranker {
        const NAME: &'static str = "ranker";
    }
}

/// Declared configuration fields of a decision maker.
///
/// Implemented by the `decision_maker!` macro, which also generates the
/// constructor, equality and the `Name(field=value, ...)` display.
pub trait ValueObject {
    /// Type name used in the display form.
    const NAME: &'static str;

    /// Field names paired with their rendered values, in declaration order.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Base contract of every algorithm operating over a decision matrix.
pub trait DecisionMaker: ValueObject {
    /// The algorithm family this implementation belongs to.
    type Kind: CapabilityKind;

    /// Returns the family name of this decision maker.
    fn capability(&self) -> &'static str {
        <Self::Kind as CapabilityKind>::NAME
    }

    /// Rejects field combinations this algorithm cannot process.
    ///
    /// Runs before any computation. Accepts everything unless overridden.
    fn validate_data(&self, data: &MatrixData) -> Result<(), DataError> {
        let _ = data;
        Ok(())
    }
}
