use async_graphql::*;
use graphql::mutations::Mutations as MutationRoot;
use graphql::queries::Queries as QueryRoot;

fn main() -> std::io::Result<()> {
    // Resolvers are never run here, so no database is attached.
    let schema = Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription).finish();
    // Print the schema in SDL format
    println!("{}", &schema.sdl());
    Ok(())
}
