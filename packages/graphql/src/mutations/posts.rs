use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use repositories::PostRepository;
use sea_orm::DatabaseConnection;

use crate::errors::{to_graphql_error, GraphqlError};
use crate::types::post::Post as PostType;

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author_id: ID,
    ) -> Result<PostType> {
        let author_id = parse_author_id(&author_id)?;
        let db = ctx.data::<DatabaseConnection>()?;
        match PostRepository::create_post(db, title, content, author_id).await {
            Ok(post) => {
                tracing::info!(post_id = post.id, author_id, "post created");
                Ok(PostType::from(post))
            }
            Err(e) => {
                tracing::error!(author_id, "failed to insert post");
                Err(to_graphql_error(e))
            }
        }
    }
}

/// `authorId` is an `ID`, so clients may send `"1"` or `1`.
fn parse_author_id(raw: &ID) -> Result<i32> {
    raw.parse::<i32>().map_err(|_| {
        GraphqlError::BadUserInput {
            message: format!("authorId must be an integer, got {:?}", raw.as_str()),
        }
        .extend()
    })
}
