mod ast;
mod build;
mod eval;


pub use ast::{CompareOp, ComparePredicate, Predicate};
pub use build::PredicateError;
pub use eval::{FieldPresence, Row, eval};

pub(crate) use build::build;
