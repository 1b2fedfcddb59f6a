pub mod types;
pub mod queries;
pub mod mutations;
pub mod errors;
pub mod schema;

pub use schema::{build_schema, AppSchema};

#[cfg(test)]
pub mod test_helpers;
