use async_graphql::{Context, Object, Result};
use repositories::PostRepository;
use sea_orm::DatabaseConnection;

use crate::errors::to_graphql_error;
use crate::types::post::Post as PostType;

#[derive(Default)]
pub struct PostQueries;

#[Object]
impl PostQueries {
    /// Get a post by id
    async fn get_post(&self, ctx: &Context<'_>, id_num: i32) -> Result<PostType> {
        let db = ctx.data::<DatabaseConnection>()?;
        PostRepository::find_by_id(db, id_num)
            .await
            .map(PostType::from)
            .map_err(to_graphql_error)
    }
}
