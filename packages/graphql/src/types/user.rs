use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use repositories::PostRepository;
use sea_orm::DatabaseConnection;

use super::post::Post;
use crate::errors::to_graphql_error;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[ComplexObject]
impl User {
    /// Posts written by this user, oldest first. One query per user.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let posts = PostRepository::find_by_author(db, self.id)
            .await
            .map_err(to_graphql_error)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

impl From<models::users::Model> for User {
    fn from(u: models::users::Model) -> Self {
        User {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}
