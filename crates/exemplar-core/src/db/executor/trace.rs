//! Executor query tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! execution semantics.

///
/// QueryTraceSink
///

pub trait QueryTraceSink: Send + Sync {
    fn on_event(&self, event: QueryTraceEvent);
}

///
/// TraceOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceOp {
    FindAll,
    FindOne,
    Count,
    Exists,
}

///
/// TracePhase
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TracePhase {
    Compile,
    Execute,
}

///
/// QueryTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QueryTraceEvent {
    pub op: TraceOp,
    pub phase: TracePhase,
    /// Leaf conditions in the compiled conjunction.
    pub conditions: usize,
    /// Rows produced by the execute phase; `None` during compile and for
    /// the boolean existence shape.
    pub rows: Option<u64>,
}
