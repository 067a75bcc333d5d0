//! Module: db::predicate::build
//! Responsibility: compile normalized probe fields plus the matching
//! policy into a predicate tree, and schema-validate compiled subtrees.
//! Does not own: normalization or evaluation semantics.

use crate::{
    db::{
        matcher::{ExampleMatcher, FieldMatcher, StringMode, TextCase},
        predicate::{CompareOp, ComparePredicate, Predicate},
        probe::ProbeField,
        schema::{FieldType, RecordSchema, SchemaError},
    },
    value::{TextMode, Value},
};
use thiserror::Error as ThisError;

///
/// PredicateError
///
/// Compilation failures. Surfaced to callers immediately; a predicate
/// that cannot compile never reaches the store.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PredicateError {
    #[error("field '{field}' is {ty}; string mode '{mode}' applies only to text fields")]
    UnsupportedOverride {
        field: String,
        ty: FieldType,
        mode: StringMode,
    },

    #[error("custom matcher produced an illegal predicate: {0}")]
    InvalidCustomPredicate(#[from] SchemaError),
}

/// Compile normalized probe fields into a conjunction.
///
/// Present fields dispatch through the per-field override when one is
/// registered, otherwise through the policy defaults. Absent fields (only
/// retained under include-null semantics) compile to IS NULL.
pub(crate) fn build(
    fields: &[ProbeField],
    schema: &RecordSchema,
    matcher: &ExampleMatcher,
) -> Result<Predicate, PredicateError> {
    let mut conditions = Vec::with_capacity(fields.len());

    for probe_field in fields {
        let Some(value) = &probe_field.value else {
            conditions.push(Predicate::is_null(probe_field.name));
            continue;
        };

        // Normalization only emits schema fields; re-checking keeps this
        // pass total instead of trusting the caller.
        let ty = schema
            .field(probe_field.name)
            .map(|model| model.ty)
            .ok_or_else(|| {
                PredicateError::InvalidCustomPredicate(SchemaError::UnknownField {
                    field: probe_field.name.to_string(),
                })
            })?;

        match matcher.override_for(probe_field.name) {
            Some(FieldMatcher::Custom(compile)) => {
                let subtree = compile(probe_field.name, value);
                validate(&subtree, schema)?;
                conditions.push(subtree);
            }
            Some(FieldMatcher::Strategy { mode, case }) => {
                let text_mode = match case {
                    TextCase::Default => default_text_mode(matcher),
                    TextCase::Sensitive => TextMode::Cs,
                    TextCase::Insensitive => TextMode::Ci,
                };
                conditions.push(compile_strategy(
                    probe_field.name,
                    ty,
                    value,
                    *mode,
                    text_mode,
                    true,
                )?);
            }
            None => {
                conditions.push(compile_strategy(
                    probe_field.name,
                    ty,
                    value,
                    matcher.default_string_mode(),
                    default_text_mode(matcher),
                    false,
                )?);
            }
        }
    }

    Ok(match conditions.len() {
        0 => Predicate::True,
        1 => conditions.remove(0),
        _ => Predicate::And(conditions),
    })
}

const fn default_text_mode(matcher: &ExampleMatcher) -> TextMode {
    if matcher.ignores_case() {
        TextMode::Ci
    } else {
        TextMode::Cs
    }
}

/// Compile one field condition under a comparison strategy.
///
/// Non-text fields always compare by equality. The matcher-wide default
/// string mode is silently ignored for them, but a per-field override
/// that explicitly requests a text-only mode is a compile error.
fn compile_strategy(
    field: &str,
    ty: FieldType,
    value: &Value,
    mode: StringMode,
    text_mode: TextMode,
    explicit: bool,
) -> Result<Predicate, PredicateError> {
    if ty != FieldType::Text {
        if explicit && mode != StringMode::Exact {
            return Err(PredicateError::UnsupportedOverride {
                field: field.to_string(),
                ty,
                mode,
            });
        }
        return Ok(Predicate::eq(field, value.clone()));
    }

    let op = match mode {
        StringMode::Exact => CompareOp::Eq,
        StringMode::Containing => CompareOp::Contains,
        StringMode::Starting => CompareOp::StartsWith,
        StringMode::Ending => CompareOp::EndsWith,
    };

    Ok(Predicate::Compare(ComparePredicate::new(
        field,
        op,
        value.clone(),
        text_mode,
    )))
}

/// Schema-validate a predicate subtree.
///
/// Used on custom-matcher output: every referenced field must exist and
/// every compare literal must be legal for the field's type.
pub(crate) fn validate(predicate: &Predicate, schema: &RecordSchema) -> Result<(), SchemaError> {
    match predicate {
        Predicate::True => Ok(()),
        Predicate::And(children) => children.iter().try_for_each(|child| validate(child, schema)),
        Predicate::Compare(cmp) => schema.check_value(&cmp.field, &cmp.value),
        Predicate::IsNull { field } => schema
            .field(field)
            .map(|_| ())
            .ok_or_else(|| SchemaError::UnknownField {
                field: field.clone(),
            }),
    }
}
