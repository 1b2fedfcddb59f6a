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
