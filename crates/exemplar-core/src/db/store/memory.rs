use crate::{
    db::{
        predicate::{Predicate, eval},
        record::Record,
        schema::RecordSchema,
        store::{QueryStore, StoreError},
    },
    types::Id,
    value::Value,
};
use std::collections::BTreeMap;

///
/// MemoryStore
///
/// Schema-bound in-memory table. Rows are keyed by an identity-assigned
/// id and iterate in ascending id order, which is the store-default
/// order every query shape observes.
///

#[derive(Clone, Debug)]
pub struct MemoryStore {
    schema: RecordSchema,
    rows: BTreeMap<Id, Record>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(schema: RecordSchema) -> Self {
        Self {
            schema,
            rows: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Insert a record, identity-style: the store assigns the next id and
    /// overwrites any supplied primary-key value. Fields the record does
    /// not carry are stored as explicit nulls. Returns the assigned id.
    pub fn insert(&mut self, record: Record) -> Result<Id, StoreError> {
        for (field, value) in record.fields() {
            if field != self.schema.primary_key() {
                self.schema.check_value(field, value)?;
            }
        }

        let id = self
            .rows
            .last_key_value()
            .map_or_else(|| Id::new(1), |(last, _)| last.next());

        let mut row = record;
        row.put(self.schema.primary_key(), Value::Id(id));
        for field in self.schema.fields() {
            if row.get(field.name).is_none() {
                row.put(field.name, Value::Null);
            }
        }

        self.rows.insert(id, row);
        Ok(id)
    }

    fn matches<'a>(&'a self, predicate: &'a Predicate) -> impl Iterator<Item = &'a Record> {
        self.rows.values().filter(move |row| eval(*row, predicate))
    }
}

impl QueryStore for MemoryStore {
    fn execute(&self, predicate: &Predicate) -> Result<Vec<Record>, StoreError> {
        Ok(self.matches(predicate).cloned().collect())
    }

    fn execute_count(&self, predicate: &Predicate) -> Result<u64, StoreError> {
        Ok(self.matches(predicate).count() as u64)
    }

    fn execute_exists(&self, predicate: &Predicate) -> Result<bool, StoreError> {
        // Short-circuits on the first satisfying row.
        Ok(self.matches(predicate).next().is_some())
    }
}
