//! Module: db::schema
//! Responsibility: the immutable structural definition of a record type and
//! the legality checks probes, records, and compiled predicates run against.
//! Does not own: probe normalization or predicate compilation.

use crate::value::Value;
use std::fmt;
use thiserror::Error as ThisError;

///
/// FieldType
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldType {
    Decimal,
    Id,
    Int,
    Text,
    Uint,
}

impl FieldType {
    /// Whether a value literal is legal for this field type.
    /// Null is legal for every type; nullability is a row-level concern.
    #[must_use]
    pub const fn admits(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null)
                | (Self::Decimal, Value::Decimal(_))
                | (Self::Id, Value::Id(_))
                | (Self::Int, Value::Int(_))
                | (Self::Text, Value::Text(_))
                | (Self::Uint, Value::Uint(_))
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Decimal => "decimal",
            Self::Id => "id",
            Self::Int => "int",
            Self::Text => "text",
            Self::Uint => "uint",
        };
        write!(f, "{label}")
    }
}

///
/// SchemaError
///
/// Legality violations against a record schema. Surfaced to callers as
/// "invalid probe" when raised on the probe path.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("unknown field: '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' expects {expected}, got {found:?}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: Value,
    },

    #[error("duplicate field: '{field}'")]
    DuplicateField { field: String },

    #[error("primary key field '{field}' must have type id")]
    InvalidPrimaryKey { field: String },
}

///
/// FieldModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    pub name: &'static str,
    pub ty: FieldType,
}

///
/// RecordSchema
///
/// Ordered set of named, typed fields plus a designated primary key.
/// Built once at composition time; immutable afterwards. Field order is
/// the declaration order and drives normalized probe order.
///

#[derive(Clone, Debug)]
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<FieldModel>,
    primary_key: &'static str,
}

impl RecordSchema {
    /// Start building a schema. The first field declared with
    /// `FieldType::Id` becomes the primary key.
    #[must_use]
    pub const fn builder(name: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            name,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldModel] {
        &self.fields
    }

    #[must_use]
    pub const fn primary_key(&self) -> &'static str {
        self.primary_key
    }

    /// Look up a field model by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check that a (field, value) pair is legal against this schema.
    pub fn check_value(&self, field: &str, value: &Value) -> Result<(), SchemaError> {
        let model = self.field(field).ok_or_else(|| SchemaError::UnknownField {
            field: field.to_string(),
        })?;

        if model.ty.admits(value) {
            Ok(())
        } else {
            Err(SchemaError::TypeMismatch {
                field: field.to_string(),
                expected: model.ty,
                found: value.clone(),
            })
        }
    }
}

///
/// SchemaBuilder
///

#[derive(Debug)]
pub struct SchemaBuilder {
    name: &'static str,
    fields: Vec<FieldModel>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn field(mut self, name: &'static str, ty: FieldType) -> Self {
        self.fields.push(FieldModel { name, ty });
        self
    }

    /// Finish the schema. Fails on duplicate field names or when no
    /// id-typed field exists to act as the primary key.
    pub fn build(self) -> Result<RecordSchema, SchemaError> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateField {
                    field: field.name.to_string(),
                });
            }
        }

        let primary_key = self
            .fields
            .iter()
            .find(|f| f.ty == FieldType::Id)
            .map(|f| f.name)
            .ok_or_else(|| SchemaError::InvalidPrimaryKey {
                field: self.name.to_string(),
            })?;

        Ok(RecordSchema {
            name: self.name,
            fields: self.fields,
            primary_key,
        })
    }
}
