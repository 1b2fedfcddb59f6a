use async_graphql::{Context, Object, Result};
use repositories::UserRepository;
use sea_orm::DatabaseConnection;

use crate::errors::to_graphql_error;
use crate::types::user::User as UserType;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// Get a user by id, with their posts
    async fn get_user(&self, ctx: &Context<'_>, id_num: i32) -> Result<UserType> {
        let db = ctx.data::<DatabaseConnection>()?;
        UserRepository::find_by_id(db, id_num)
            .await
            .map(UserType::from)
            .map_err(to_graphql_error)
    }
}
