use crate::value::{TextMode, Value};
use std::ops::BitAnd;

///
/// Predicate AST
///
/// Pure representation of a compiled example query. The one-probe-one-
/// policy model is a flat conjunction, so the tree is intentionally
/// closed to what the builder can emit: no OR, no NOT, no grouping.
/// All interpretation happens in later passes (validation, evaluation).
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Contains,
    StartsWith,
    EndsWith,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
    pub mode: TextMode,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: Value, mode: TextMode) -> Self {
        Self {
            field: field.into(),
            op,
            value,
            mode,
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Eq, value, TextMode::Cs)
    }

    #[must_use]
    pub fn contains(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Contains, value, TextMode::Cs)
    }

    #[must_use]
    pub fn starts_with(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::StartsWith, value, TextMode::Cs)
    }

    #[must_use]
    pub fn ends_with(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::EndsWith, value, TextMode::Cs)
    }

    /// Rebuild with an explicit case mode.
    #[must_use]
    pub fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    /// Matches every record. The empty probe compiles to this.
    True,
    And(Vec<Self>),
    Compare(ComparePredicate),
    IsNull { field: String },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::eq(field, value))
    }

    #[must_use]
    pub fn contains(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::contains(field, value))
    }

    #[must_use]
    pub fn starts_with(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::starts_with(field, value))
    }

    #[must_use]
    pub fn ends_with(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::ends_with(field, value))
    }

    #[must_use]
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::IsNull {
            field: field.into(),
        }
    }

    /// Number of leaf conditions in the conjunction.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        match self {
            Self::True => 0,
            Self::And(children) => children.iter().map(Self::condition_count).sum(),
            Self::Compare(_) | Self::IsNull { .. } => 1,
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::And(vec![self.clone(), rhs.clone()])
    }
}
