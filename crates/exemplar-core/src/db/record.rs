//! Module: db::record
//! Responsibility: a full instance of a record schema as it exists in the
//! store, with stored nulls explicit.

use crate::{types::Id, value::Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Record
///
/// Field name to value mapping. Stores hold records with every schema
/// field materialized; fields without a value carry `Value::Null` so that
/// null-matching predicates can see them.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    values: BTreeMap<String, Value>,
}

impl Record {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Fluent field setter for inline construction.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// The primary-key value, when present and id-typed.
    #[must_use]
    pub fn id(&self, primary_key: &str) -> Option<Id> {
        match self.get(primary_key) {
            Some(Value::Id(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn put(&mut self, field: impl Into<String>, value: Value) {
        self.values.insert(field.into(), value);
    }
}
