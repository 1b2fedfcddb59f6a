use async_graphql::{EmptySubscription, Schema};
use sea_orm::DatabaseConnection;

use crate::mutations::Mutations;
use crate::queries::Queries;

pub type AppSchema = Schema<Queries, Mutations, EmptySubscription>;

/// Builds the schema with `db` available to every resolver.
pub fn build_schema(db: DatabaseConnection) -> AppSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(db)
        .finish()
}
