use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::*;

use super::PostRepository;
use crate::RepositoryError;

impl PostRepository {
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Model, RepositoryError> {
        PostDao::find_by_id(db, id)
            .await?
            .ok_or(RepositoryError::NotFound { entity: "Post", id })
    }

    pub async fn find_by_author(
        db: &DatabaseConnection,
        author_id: i32,
    ) -> Result<Vec<Model>, RepositoryError> {
        Ok(PostDao::find_by_author(db, author_id).await?)
    }
}
