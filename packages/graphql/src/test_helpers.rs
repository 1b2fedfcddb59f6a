use models::{posts, users};
use sea_orm::*;

use crate::schema::{build_schema, AppSchema};

pub type TestSchema = AppSchema;

pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    models::schema::create_tables(&db)
        .await
        .expect("Failed to create tables");
    db
}

pub fn create_test_schema(db: DatabaseConnection) -> TestSchema {
    build_schema(db)
}

pub async fn create_test_user(db: &DatabaseConnection, name: &str, email: &str) -> users::Model {
    let user = users::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        ..Default::default()
    };

    user.insert(db).await.expect("Failed to create test user")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author_id: i32,
    title: &str,
    content: &str,
) -> posts::Model {
    let post = posts::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        content: ActiveValue::Set(content.to_string()),
        author_id: ActiveValue::Set(author_id),
        ..Default::default()
    };

    post.insert(db).await.expect("Failed to create test post")
}
