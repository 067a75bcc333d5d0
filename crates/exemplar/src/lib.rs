//! Exemplar: query-by-example matching over a tabular store.
//!
//! This is the public meta-crate. Downstream users depend on **exemplar**
//! only. It re-exports the stable public API from `exemplar-core`: field
//! values, record schemas, probes, matching policies, and the engine.

pub use exemplar_core as core;

pub use exemplar_core::{
    db::{
        ExampleEngine, ExampleMatcher, FieldMatcher, FieldType, MemoryStore, NullHandling, Probe,
        QueryStore, Record, RecordSchema, StringMode, TextCase,
        executor::{QueryTraceEvent, QueryTraceSink, TraceOp, TracePhase},
        predicate::{CompareOp, ComparePredicate, Predicate},
        store::StoreError,
    },
    error::EngineError,
    types::Id,
    value::{TextMode, Value},
};

///
/// Prelude
///

pub mod prelude {
    pub use exemplar_core::prelude::*;
}
