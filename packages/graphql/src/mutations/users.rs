use async_graphql::{Context, Object, Result};
use repositories::UserRepository;
use sea_orm::DatabaseConnection;

use crate::errors::to_graphql_error;
use crate::types::user::User as UserType;

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, name: String, email: String) -> Result<UserType> {
        let db = ctx.data::<DatabaseConnection>()?;
        match UserRepository::create(db, name, email).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "user created");
                Ok(UserType::from(user))
            }
            Err(e) => {
                tracing::error!("failed to insert user");
                Err(to_graphql_error(e))
            }
        }
    }
}
