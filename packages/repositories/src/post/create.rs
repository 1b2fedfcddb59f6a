use data_access_objects::PostDao;
use models::posts;
use sea_orm::*;

use super::PostRepository;
use crate::RepositoryError;

impl PostRepository {
    /// Inserts a post for `author_id`. The author is not looked up first; the
    /// foreign key on `posts.author_id` rejects unknown authors.
    pub async fn create_post(
        db: &DatabaseConnection,
        title: String,
        content: String,
        author_id: i32,
    ) -> Result<posts::Model, RepositoryError> {
        let model = posts::ActiveModel {
            title: ActiveValue::set(title),
            content: ActiveValue::set(content),
            author_id: ActiveValue::set(author_id),
            ..Default::default()
        };

        let post = PostDao::insert(db, model).await?;
        tracing::debug!(post_id = post.id, author_id, "post inserted");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::super::PostRepository;
    use crate::test_helpers::*;
    use crate::RepositoryError;

    #[tokio::test]
    async fn test_create_post_stores_fields() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "Writer").await;

        let post = PostRepository::create_post(&db, "Title".into(), "# Body".into(), user.id)
            .await
            .unwrap();

        assert_eq!(post.title, "Title");
        assert_eq!(post.content, "# Body");
        assert_eq!(post.author_id, user.id);
    }

    #[tokio::test]
    async fn test_create_post_unknown_author_is_database_error() {
        let db = setup_test_db().await;

        let err = PostRepository::create_post(&db, "t".into(), "c".into(), 12345)
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
