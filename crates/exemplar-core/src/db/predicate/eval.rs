use crate::{
    db::{
        predicate::{CompareOp, ComparePredicate, Predicate},
        record::Record,
    },
    value::{Value, compare_eq},
};

///
/// FieldPresence
///
/// Result of reading a field from a row during evaluation. Distinguishes
/// a missing field from a present field whose stored value is null.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that can expose fields by name.
/// Decouples predicate evaluation from the concrete record type.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl Row for Record {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

///
/// Evaluate a predicate against a single row.
///
/// Pure runtime evaluation: no schema access, no store logic. Missing
/// fields and undefined comparisons evaluate to false, never to an error;
/// predicates are validated before they reach this point.
///
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,

        Predicate::And(children) => children.iter().all(|child| eval(row, child)),

        Predicate::Compare(cmp) => eval_compare(row, cmp),

        Predicate::IsNull { field } => {
            matches!(row.field(field), FieldPresence::Present(Value::Null))
        }
    }
}

fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate {
        field,
        op,
        value,
        mode,
    } = cmp;

    let FieldPresence::Present(actual) = row.field(field) else {
        return false;
    };

    // Comparison helpers return None when the comparison is undefined;
    // eval treats that as a non-match.
    match op {
        CompareOp::Eq => compare_eq(&actual, value, *mode).unwrap_or(false),
        CompareOp::Contains => actual.text_contains(value, *mode).unwrap_or(false),
        CompareOp::StartsWith => actual.text_starts_with(value, *mode).unwrap_or(false),
        CompareOp::EndsWith => actual.text_ends_with(value, *mode).unwrap_or(false),
    }
}
