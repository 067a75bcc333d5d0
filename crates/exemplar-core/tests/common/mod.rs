//! Shared fixtures for the integration suites: the employee schema, a
//! seeded in-memory store, and a store double that always fails.
#![allow(dead_code)]

use exemplar_core::{
    db::{
        ExampleEngine, FieldType, MemoryStore, Probe, QueryStore, Record, RecordSchema,
        predicate::Predicate,
        store::StoreError,
    },
    value::Value,
};
use rust_decimal::Decimal;

pub fn employee_schema() -> RecordSchema {
    RecordSchema::builder("employees")
        .field("id", FieldType::Id)
        .field("first_name", FieldType::Text)
        .field("last_name", FieldType::Text)
        .field("department", FieldType::Text)
        .field("position", FieldType::Text)
        .field("salary", FieldType::Decimal)
        .build()
        .expect("employee schema should build")
}

fn salary(units: i64) -> Decimal {
    Decimal::new(units * 100, 2)
}

/// Twelve employees, ids 1..=12 in insertion order. Row 12 has a null
/// position.
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new(employee_schema());

    let rows = [
        ("Jane", "Doe", "IT", Some("Developer"), 75_000),
        ("Mike", "Johnson", "IT", Some("Developer"), 72_000),
        ("John", "Smith", "Engineering", Some("Software Engineer"), 85_000),
        ("Thomas", "Smith", "Engineering", Some("Senior Engineer"), 95_000),
        ("Anna", "Smith", "Sales", Some("Manager"), 68_000),
        ("Robert", "Smith", "HR", Some("Manager"), 66_000),
        ("Johnny", "Walker", "Engineering", Some("QA Engineer"), 61_000),
        ("Alice", "Brown", "Marketing", Some("Manager"), 70_000),
        ("Peter", "Parker", "Operations", Some("Manager"), 64_000),
        ("Emma", "Davis", "Engineering", Some("DevOps Engineer"), 78_000),
        ("Sophia", "Miller", "IT", Some("Support Specialist"), 52_000),
        ("Oliver", "Stone", "IT", None, 45_000),
    ];

    for (first, last, department, position, pay) in rows {
        let mut record = Record::new()
            .set("first_name", first)
            .set("last_name", last)
            .set("department", department)
            .set("salary", salary(pay));
        if let Some(position) = position {
            record = record.set("position", position);
        }
        store.insert(record).expect("fixture row should insert");
    }

    store
}

pub const TOTAL_EMPLOYEES: usize = 12;

pub fn engine() -> ExampleEngine<MemoryStore> {
    ExampleEngine::new(employee_schema(), seeded_store())
}

pub fn first_names(rows: &[Record]) -> Vec<&str> {
    rows.iter()
        .filter_map(|r| r.get("first_name"))
        .filter_map(Value::as_text)
        .collect()
}

pub fn departments(rows: &[Record]) -> Vec<&str> {
    rows.iter()
        .filter_map(|r| r.get("department"))
        .filter_map(Value::as_text)
        .collect()
}

pub fn probe(pairs: &[(&str, &str)]) -> Probe {
    pairs
        .iter()
        .fold(Probe::new(), |probe, (field, value)| probe.set(*field, *value))
}

///
/// UnreachableStore
///
/// Store double whose every operation fails with a transport error.
///

pub struct UnreachableStore;

impl QueryStore for UnreachableStore {
    fn execute(&self, _predicate: &Predicate) -> Result<Vec<Record>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn execute_count(&self, _predicate: &Predicate) -> Result<u64, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn execute_exists(&self, _predicate: &Predicate) -> Result<bool, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}
