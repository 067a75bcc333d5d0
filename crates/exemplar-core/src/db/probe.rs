//! Module: db::probe
//! Responsibility: the sparse matching template and its normalization into
//! present/absent field entries. Pure function of (probe, schema, policy).
//! Does not own: predicate compilation or store execution.

use crate::{
    db::{
        matcher::{ExampleMatcher, NullHandling},
        schema::{RecordSchema, SchemaError},
    },
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Probe
///
/// A partially-populated instance of the record schema. Omitting a field
/// and setting it to `Value::Null` are equivalent: both mean "absent".
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Probe {
    values: BTreeMap<String, Value>,
}

impl Probe {
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

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

///
/// ProbeField
///
/// One normalized probe entry in schema field order. `value: None` marks
/// an absent field retained for null inclusion; the builder compiles it
/// to an IS NULL condition.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ProbeField {
    pub name: &'static str,
    pub value: Option<Value>,
}

/// Normalize a probe against the schema under the given policy.
///
/// Validates every supplied field first (unknown field, type mismatch),
/// then walks the schema in declaration order:
/// - non-null values are present; empty text counts as absent unless the
///   policy marks empty strings significant
/// - absent fields are dropped under ignore-null semantics, retained under
///   include-null semantics
/// - the primary key is exempt from null inclusion; an identity column is
///   never null, so including it would make every query vacuously empty
pub(crate) fn normalize(
    probe: &Probe,
    schema: &RecordSchema,
    matcher: &ExampleMatcher,
) -> Result<Vec<ProbeField>, SchemaError> {
    for (field, value) in probe.fields() {
        schema.check_value(field, value)?;
    }

    let mut out = Vec::with_capacity(schema.fields().len());

    for field in schema.fields() {
        let supplied = probe
            .get(field.name)
            .filter(|value| !value.is_null())
            .filter(|value| match value.as_text() {
                Some(text) => matcher.empty_significant() || !text.is_empty(),
                None => true,
            });

        match (supplied, matcher.null_handling()) {
            (Some(value), _) => out.push(ProbeField {
                name: field.name,
                value: Some(value.clone()),
            }),
            (None, NullHandling::Ignore) => {}
            (None, NullHandling::Include) => {
                if field.name != schema.primary_key() {
                    out.push(ProbeField {
                        name: field.name,
                        value: None,
                    });
                }
            }
        }
    }

    Ok(out)
}
