pub mod executor;
pub mod matcher;
pub mod predicate;
pub mod probe;
pub mod record;
pub mod schema;
pub mod store;

pub use executor::ExampleEngine;
pub use matcher::{ExampleMatcher, FieldMatcher, NullHandling, StringMode, TextCase};
pub use probe::Probe;
pub use record::Record;
pub use schema::{FieldType, RecordSchema};
pub use store::{MemoryStore, QueryStore};
