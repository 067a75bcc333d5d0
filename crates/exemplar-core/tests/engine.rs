//! Engine-level behavior: result shapes, determinism, error propagation,
//! and tracing.

mod common;

use common::{UnreachableStore, employee_schema, engine, probe};
use exemplar_core::{
    db::{
        ExampleEngine, ExampleMatcher, FieldMatcher, Probe,
        executor::{QueryTraceEvent, QueryTraceSink, TraceOp, TracePhase},
    },
    error::EngineError,
    types::Id,
    value::Value,
};
use std::sync::Mutex;

#[test]
fn empty_probe_matches_the_full_record_set() {
    let engine = engine();
    let rows = engine
        .find_all(&Probe::new(), None)
        .expect("find_all should succeed");

    assert_eq!(rows.len(), common::TOTAL_EMPLOYEES);
}

#[test]
fn exists_agrees_with_count_being_positive() {
    let engine = engine();
    let probes = [
        Probe::new(),
        probe(&[("department", "IT")]),
        probe(&[("department", "Non-Existent")]),
        probe(&[("position", "Manager"), ("department", "Sales")]),
    ];

    for p in &probes {
        let count = engine.count(p, None).expect("count should succeed");
        let exists = engine.exists(p, None).expect("exists should succeed");
        assert_eq!(exists, count > 0);
    }
}

#[test]
fn find_one_returns_the_unique_exact_match() {
    let engine = engine();
    let row = engine
        .find_one(
            &probe(&[
                ("first_name", "Jane"),
                ("last_name", "Doe"),
                ("department", "IT"),
                ("position", "Developer"),
            ]),
            None,
        )
        .expect("find_one should succeed")
        .expect("Jane should be found");

    assert_eq!(row.get("first_name"), Some(&Value::from("Jane")));
    assert_eq!(row.id("id"), Some(Id::new(1)));
}

#[test]
fn find_one_absence_is_ok_none() {
    let engine = engine();
    let row = engine
        .find_one(&probe(&[("first_name", "Nobody")]), None)
        .expect("find_one should succeed");

    assert!(row.is_none());
}

#[test]
fn find_one_with_multiple_matches_returns_the_lowest_id() {
    let engine = engine();
    let row = engine
        .find_one(&probe(&[("position", "Manager")]), None)
        .expect("find_one should succeed")
        .expect("a manager should be found");

    // Four managers match; the first manager in id order is Anna (id 5).
    assert_eq!(row.id("id"), Some(Id::new(5)));
    assert_eq!(row.get("first_name"), Some(&Value::from("Anna")));
}

#[test]
fn unknown_probe_field_is_an_invalid_probe() {
    let engine = engine();
    let err = engine
        .find_all(&Probe::new().set("nickname", "JJ"), None)
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidProbe(_)));
}

#[test]
fn mistyped_probe_field_is_an_invalid_probe() {
    let engine = engine();
    let err = engine
        .count(&Probe::new().set("first_name", 42_i64), None)
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidProbe(_)));
}

#[test]
fn text_mode_override_on_decimal_field_is_an_invalid_predicate() {
    let engine = engine();
    let matcher = ExampleMatcher::matching()
        .with_matcher("salary", FieldMatcher::contains());
    let err = engine
        .exists(
            &Probe::new().set("salary", rust_decimal::Decimal::new(7_500_000, 2)),
            Some(&matcher),
        )
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidPredicate(_)));
}

#[test]
fn store_failure_propagates_through_every_shape() {
    let engine = ExampleEngine::new(employee_schema(), UnreachableStore);
    let p = Probe::new();

    let err = engine.find_all(&p, None).unwrap_err();
    assert!(err.is_store_unavailable());
    assert!(engine.find_one(&p, None).unwrap_err().is_store_unavailable());
    assert!(engine.count(&p, None).unwrap_err().is_store_unavailable());
    assert!(engine.exists(&p, None).unwrap_err().is_store_unavailable());
}

///
/// CollectingSink
///

struct CollectingSink(Mutex<Vec<QueryTraceEvent>>);

impl QueryTraceSink for CollectingSink {
    fn on_event(&self, event: QueryTraceEvent) {
        self.0.lock().expect("sink lock").push(event);
    }
}

static SINK: CollectingSink = CollectingSink(Mutex::new(Vec::new()));

#[test]
fn trace_sink_observes_compile_and_execute_phases() {
    let engine = ExampleEngine::new(employee_schema(), common::seeded_store()).with_trace(&SINK);

    let count = engine
        .count(&probe(&[("department", "IT"), ("position", "Developer")]), None)
        .expect("count should succeed");
    assert_eq!(count, 2);

    let events = SINK.0.lock().expect("sink lock");
    assert_eq!(
        *events,
        vec![
            QueryTraceEvent {
                op: TraceOp::Count,
                phase: TracePhase::Compile,
                conditions: 2,
                rows: None,
            },
            QueryTraceEvent {
                op: TraceOp::Count,
                phase: TracePhase::Execute,
                conditions: 2,
                rows: Some(2),
            },
        ]
    );
}
