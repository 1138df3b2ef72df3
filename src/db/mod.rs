pub mod filter;
pub mod pool;
pub mod queries;
pub mod reports;
pub mod schema;

pub use filter::{Predicate, RecordFilter, Table, LOW_STOCK_CONDITION};
pub use pool::{create_memory_pool, create_pool};
pub use queries::*;
