use crate::db::{predicate::PredicateError, schema::SchemaError, store::StoreError};
use thiserror::Error as ThisError;

///
/// EngineError
///
/// Failure taxonomy for the four query shapes. Every operation either
/// fully succeeds or fails with one of these; absence of a `find_one`
/// match is an `Ok(None)`, never an error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EngineError {
    /// The probe does not conform to the record schema.
    #[error("invalid probe: {0}")]
    InvalidProbe(#[from] SchemaError),

    /// The probe and policy could not compile to a legal predicate.
    #[error("invalid predicate: {0}")]
    InvalidPredicate(#[from] PredicateError),

    /// The store failed during execution. Propagated as-is; this layer
    /// never retries and never degrades a failure into "no match".
    #[error("{0}")]
    StoreUnavailable(#[from] StoreError),
}

impl EngineError {
    #[must_use]
    pub const fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
