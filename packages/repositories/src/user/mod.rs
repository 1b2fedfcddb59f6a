use data_access_objects::UserDao;
use models::users::{ActiveModel, Model};
use sea_orm::*;

use crate::RepositoryError;

pub struct UserRepository;

impl UserRepository {
    pub async fn create(
        db: &DatabaseConnection,
        name: String,
        email: String,
    ) -> Result<Model, RepositoryError> {
        let model = ActiveModel {
            name: ActiveValue::set(name),
            email: ActiveValue::set(email),
            ..Default::default()
        };
        let user = UserDao::insert(db, model).await?;
        tracing::debug!(user_id = user.id, "user inserted");
        Ok(user)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Model, RepositoryError> {
        UserDao::find_by_id(db, id)
            .await?
            .ok_or(RepositoryError::NotFound { entity: "User", id })
    }
}
