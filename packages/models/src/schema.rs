use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::prelude::{Posts, Users};

/// Creates the `users` and `posts` tables when they are missing.
///
/// `users` goes first so the foreign key on `posts.author_id` has a target.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, Users).await?;
    create_table(db, Posts).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{posts, users};
    use sea_orm::*;

    async fn memory_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1);
        Database::connect(opts).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let db = memory_db().await;
        create_tables(&db).await.unwrap();
        create_tables(&db).await.unwrap();

        assert_eq!(Users::find().count(&db).await.unwrap(), 0);
        assert_eq!(Posts::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_posts_relate_to_their_author() {
        let db = memory_db().await;
        create_tables(&db).await.unwrap();

        let user = users::ActiveModel {
            name: Set("Ada".to_string()),
            email: Set("ada@example.com".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        posts::ActiveModel {
            title: Set("Notes".to_string()),
            content: Set("On the engine".to_string()),
            author_id: Set(user.id),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let related = user.find_related(Posts).all(&db).await.unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].title, "Notes");
    }

    #[tokio::test]
    async fn test_post_with_unknown_author_is_rejected() {
        let db = memory_db().await;
        create_tables(&db).await.unwrap();

        let res = Posts::insert(posts::ActiveModel {
            title: Set("Orphan".to_string()),
            content: Set("no author".to_string()),
            author_id: Set(42),
            ..Default::default()
        })
        .exec(&db)
        .await;

        assert!(res.is_err());
    }
}
