//! Core runtime for Exemplar: field values, record schemas, probes,
//! matching policies, predicates, and the query-by-example executor
//! exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod db;
pub mod error;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Domain vocabulary only. Store internals, normalization, and trace
/// types stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        db::{
            ExampleEngine, ExampleMatcher, FieldMatcher, FieldType, MemoryStore, NullHandling,
            Probe, QueryStore, Record, RecordSchema, StringMode,
        },
        error::EngineError,
        types::Id,
        value::{TextMode, Value},
    };
}
