//! Module: db::executor
//! Responsibility: the four example-query shapes, wired as one stateless
//! normalize -> build -> execute pipeline per invocation.
//! Does not own: matching policy or store internals.

mod trace;

pub use trace::{QueryTraceEvent, QueryTraceSink, TraceOp, TracePhase};

use crate::{
    db::{
        matcher::ExampleMatcher,
        predicate::{Predicate, build},
        probe::{Probe, normalize},
        record::Record,
        schema::RecordSchema,
        store::QueryStore,
    },
    error::EngineError,
};

///
/// ExampleEngine
///
/// Query-by-example engine over one record schema and one store. Schema
/// and store are constructor-injected at composition time; the engine
/// itself holds no per-query state, so one instance serves any number of
/// concurrent callers.
///

#[derive(Clone)]
pub struct ExampleEngine<S: QueryStore> {
    schema: RecordSchema,
    store: S,
    debug: bool,
    trace: Option<&'static dyn QueryTraceSink>,
}

impl<S: QueryStore> ExampleEngine<S> {
    #[must_use]
    pub const fn new(schema: RecordSchema, store: S) -> Self {
        Self {
            schema,
            store,
            debug: false,
            trace: None,
        }
    }

    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub const fn with_trace(mut self, trace: &'static dyn QueryTraceSink) -> Self {
        self.trace = Some(trace);
        self
    }

    #[must_use]
    pub const fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Every record matching the probe, in store-default order.
    pub fn find_all(
        &self,
        probe: &Probe,
        matcher: Option<&ExampleMatcher>,
    ) -> Result<Vec<Record>, EngineError> {
        let predicate = self.compile(TraceOp::FindAll, probe, matcher)?;
        let rows = self.store.execute(&predicate)?;

        self.debug_log(format!("find_all matched {} row(s)", rows.len()));
        self.emit(TraceOp::FindAll, TracePhase::Execute, &predicate, Some(rows.len() as u64));

        Ok(rows)
    }

    /// The first record matching the probe in store-default order, or
    /// `None`. With the in-memory store that order is ascending id, so a
    /// multi-match probe deterministically yields the lowest-id record.
    /// Zero matches is an absent result, never an error.
    pub fn find_one(
        &self,
        probe: &Probe,
        matcher: Option<&ExampleMatcher>,
    ) -> Result<Option<Record>, EngineError> {
        let predicate = self.compile(TraceOp::FindOne, probe, matcher)?;
        let row = self.store.execute(&predicate)?.into_iter().next();

        self.debug_log(format!("find_one matched: {}", row.is_some()));
        self.emit(
            TraceOp::FindOne,
            TracePhase::Execute,
            &predicate,
            Some(u64::from(row.is_some())),
        );

        Ok(row)
    }

    /// Number of records matching the probe.
    pub fn count(
        &self,
        probe: &Probe,
        matcher: Option<&ExampleMatcher>,
    ) -> Result<u64, EngineError> {
        let predicate = self.compile(TraceOp::Count, probe, matcher)?;
        let count = self.store.execute_count(&predicate)?;

        self.debug_log(format!("count matched {count} row(s)"));
        self.emit(TraceOp::Count, TracePhase::Execute, &predicate, Some(count));

        Ok(count)
    }

    /// Whether any record matches the probe. Delegates to the store's
    /// native existence check so the result set is never materialized.
    pub fn exists(
        &self,
        probe: &Probe,
        matcher: Option<&ExampleMatcher>,
    ) -> Result<bool, EngineError> {
        let predicate = self.compile(TraceOp::Exists, probe, matcher)?;
        let exists = self.store.execute_exists(&predicate)?;

        self.debug_log(format!("exists: {exists}"));
        self.emit(TraceOp::Exists, TracePhase::Execute, &predicate, None);

        Ok(exists)
    }

    fn compile(
        &self,
        op: TraceOp,
        probe: &Probe,
        matcher: Option<&ExampleMatcher>,
    ) -> Result<Predicate, EngineError> {
        let default_matcher;
        let matcher = match matcher {
            Some(matcher) => matcher,
            None => {
                default_matcher = ExampleMatcher::matching();
                &default_matcher
            }
        };

        let fields = normalize(probe, &self.schema, matcher)?;
        let predicate = build(&fields, &self.schema, matcher)?;

        self.emit(op, TracePhase::Compile, &predicate, None);

        Ok(predicate)
    }

    fn emit(&self, op: TraceOp, phase: TracePhase, predicate: &Predicate, rows: Option<u64>) {
        if let Some(trace) = self.trace {
            trace.on_event(QueryTraceEvent {
                op,
                phase,
                conditions: predicate.condition_count(),
                rows,
            });
        }
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            println!("[debug] {}", s.as_ref());
        }
    }
}
