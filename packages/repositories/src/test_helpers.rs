use models::users;
use sea_orm::*;

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

pub async fn create_test_user(db: &DatabaseConnection, name: &str) -> users::Model {
    let user = users::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(format!("{}@example.com", name.to_lowercase())),
        ..Default::default()
    };

    user.insert(db).await.expect("Failed to create test user")
}
