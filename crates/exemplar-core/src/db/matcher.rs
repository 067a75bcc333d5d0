//! Module: db::matcher
//! Responsibility: the declarative matching policy applied to a probe.
//! Does not own: normalization or predicate compilation; those read this
//! policy but never mutate it.

use crate::{db::predicate::Predicate, value::Value};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, sync::Arc};

///
/// NullHandling
///
/// Whether absent probe fields are skipped (the common case) or retained
/// as "field IS NULL" conditions.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum NullHandling {
    Include,
    #[default]
    Ignore,
}

///
/// StringMode
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum StringMode {
    #[default]
    Exact,
    Containing,
    Starting,
    Ending,
}

impl fmt::Display for StringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Exact => "exact",
            Self::Containing => "containing",
            Self::Starting => "starting",
            Self::Ending => "ending",
        };
        write!(f, "{label}")
    }
}

///
/// CustomMatcherFn
///
/// Caller-supplied compilation for one field: receives the field name and
/// the present probe value, returns the predicate subtree to use instead
/// of the strategy dispatch. The subtree is schema-validated after the
/// call, so a misbehaving function surfaces as an invalid predicate, not
/// as silent mismatches.
///

pub type CustomMatcherFn = Arc<dyn Fn(&str, &Value) -> Predicate + Send + Sync>;

///
/// TextCase
///
/// Per-override case handling. `Default` defers to the matcher-wide
/// setting; the explicit variants pin the override regardless of it.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum TextCase {
    #[default]
    Default,
    Sensitive,
    Insensitive,
}

///
/// FieldMatcher
///
/// Per-field override: a closed comparison strategy or a custom predicate
/// function. Overrides only take effect for fields present in the probe;
/// an override on an absent field under ignore-null semantics is inert.
///

#[derive(Clone)]
pub enum FieldMatcher {
    Strategy { mode: StringMode, case: TextCase },
    Custom(CustomMatcherFn),
}

impl FieldMatcher {
    #[must_use]
    pub const fn exact() -> Self {
        Self::Strategy {
            mode: StringMode::Exact,
            case: TextCase::Default,
        }
    }

    #[must_use]
    pub const fn contains() -> Self {
        Self::Strategy {
            mode: StringMode::Containing,
            case: TextCase::Default,
        }
    }

    #[must_use]
    pub const fn starting() -> Self {
        Self::Strategy {
            mode: StringMode::Starting,
            case: TextCase::Default,
        }
    }

    #[must_use]
    pub const fn ending() -> Self {
        Self::Strategy {
            mode: StringMode::Ending,
            case: TextCase::Default,
        }
    }

    /// Pin this override to case-insensitive comparison.
    /// No effect on custom matchers, which own their semantics entirely.
    #[must_use]
    pub fn ignore_case(self) -> Self {
        match self {
            Self::Strategy { mode, .. } => Self::Strategy {
                mode,
                case: TextCase::Insensitive,
            },
            custom @ Self::Custom(_) => custom,
        }
    }

    /// Pin this override to case-sensitive comparison.
    #[must_use]
    pub fn case_sensitive(self) -> Self {
        match self {
            Self::Strategy { mode, .. } => Self::Strategy {
                mode,
                case: TextCase::Sensitive,
            },
            custom @ Self::Custom(_) => custom,
        }
    }

    #[must_use]
    pub fn custom(f: impl Fn(&str, &Value) -> Predicate + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }
}

impl fmt::Debug for FieldMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strategy { mode, case } => f
                .debug_struct("Strategy")
                .field("mode", mode)
                .field("case", case)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

///
/// ExampleMatcher
///
/// The matching policy for one query: null handling, default string mode,
/// default case mode, empty-string significance, and per-field overrides.
/// Value object; `with_*` methods consume and return.
///

#[derive(Clone, Debug)]
pub struct ExampleMatcher {
    null_handling: NullHandling,
    default_string_mode: StringMode,
    ignore_case: bool,
    empty_significant: bool,
    overrides: BTreeMap<String, FieldMatcher>,
}

impl ExampleMatcher {
    /// The default policy: ignore nulls, exact case-sensitive matching,
    /// empty strings insignificant, no overrides.
    #[must_use]
    pub const fn matching() -> Self {
        Self {
            null_handling: NullHandling::Ignore,
            default_string_mode: StringMode::Exact,
            ignore_case: false,
            empty_significant: false,
            overrides: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn with_include_null_values(mut self) -> Self {
        self.null_handling = NullHandling::Include;
        self
    }

    #[must_use]
    pub const fn with_ignore_null_values(mut self) -> Self {
        self.null_handling = NullHandling::Ignore;
        self
    }

    #[must_use]
    pub const fn with_string_mode(mut self, mode: StringMode) -> Self {
        self.default_string_mode = mode;
        self
    }

    #[must_use]
    pub const fn with_ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Treat empty probe strings as significant values instead of absent
    /// fields. An empty containing/starting/ending pattern then matches
    /// every non-null value of that field.
    #[must_use]
    pub const fn with_empty_significant(mut self) -> Self {
        self.empty_significant = true;
        self
    }

    #[must_use]
    pub fn with_matcher(mut self, field: impl Into<String>, matcher: FieldMatcher) -> Self {
        self.overrides.insert(field.into(), matcher);
        self
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn null_handling(&self) -> NullHandling {
        self.null_handling
    }

    #[must_use]
    pub const fn default_string_mode(&self) -> StringMode {
        self.default_string_mode
    }

    #[must_use]
    pub const fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    #[must_use]
    pub const fn empty_significant(&self) -> bool {
        self.empty_significant
    }

    #[must_use]
    pub fn override_for(&self, field: &str) -> Option<&FieldMatcher> {
        self.overrides.get(field)
    }
}

impl Default for ExampleMatcher {
    fn default() -> Self {
        Self::matching()
    }
}
