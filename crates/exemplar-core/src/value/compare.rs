use crate::value::{TextMode, Value};
use std::mem::discriminant;

/// Equality comparator used by predicate evaluation.
///
/// Rules:
/// 1. Null on either side is undefined (`None`), never equal.
/// 2. Text compares under the given `TextMode`.
/// 3. Other variants compare strictly; mismatched variants are undefined.
///
/// Mixed-variant comparisons stay undefined rather than false so callers
/// can distinguish "does not match" from "comparison is not meaningful".
#[must_use]
pub fn compare_eq(left: &Value, right: &Value, mode: TextMode) -> Option<bool> {
    if left.is_null() || right.is_null() {
        return None;
    }

    if let (Value::Text(a), Value::Text(b)) = (left, right) {
        return Some(match mode {
            TextMode::Cs => a == b,
            TextMode::Ci => Value::fold_ci(a) == Value::fold_ci(b),
        });
    }

    same_variant(left, right).then_some(left == right)
}

fn same_variant(left: &Value, right: &Value) -> bool {
    discriminant(left) == discriminant(right)
}
