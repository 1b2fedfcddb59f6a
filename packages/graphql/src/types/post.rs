use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use repositories::UserRepository;
use sea_orm::DatabaseConnection;

use super::user::User;
use crate::errors::to_graphql_error;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        let db = ctx.data::<DatabaseConnection>()?;
        UserRepository::find_by_id(db, self.author_id)
            .await
            .map(User::from)
            .map_err(to_graphql_error)
    }
}

impl From<models::posts::Model> for Post {
    fn from(p: models::posts::Model) -> Self {
        Post {
            id: p.id,
            title: p.title,
            content: p.content,
            author_id: p.author_id,
        }
    }
}
