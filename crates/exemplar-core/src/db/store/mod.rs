//! Module: db::store
//! Responsibility: the store-query boundary the executor talks to, plus
//! the in-memory reference store. Implementations own session scoping:
//! each call acquires and releases whatever connection state it needs,
//! on every exit path.

mod memory;

pub use memory::MemoryStore;

use crate::db::{predicate::Predicate, record::Record, schema::SchemaError};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    /// Transport or connectivity failure during execution. Propagated
    /// as-is; retry policy belongs to the store client, not this layer.
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    /// A row rejected on insert (seeding path, never the query path).
    #[error("row rejected: {0}")]
    RejectedRow(#[from] SchemaError),
}

impl StoreError {
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

///
/// QueryStore
///
/// Predicate-based query execution against the backing store. Read-only;
/// all three shapes either fully succeed or fail, never partially.
///

pub trait QueryStore {
    /// Every record satisfying the predicate, in store-default order.
    fn execute(&self, predicate: &Predicate) -> Result<Vec<Record>, StoreError>;

    /// Number of records satisfying the predicate.
    fn execute_count(&self, predicate: &Predicate) -> Result<u64, StoreError>;

    /// Whether any record satisfies the predicate. Must short-circuit
    /// rather than materialize the full result set.
    fn execute_exists(&self, predicate: &Predicate) -> Result<bool, StoreError>;
}
