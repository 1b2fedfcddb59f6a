pub mod posts;
pub mod prelude;
pub mod schema;
pub mod users;
