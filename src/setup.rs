// src/setup.rs

use sea_orm::*;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};

pub(super) fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

pub(super) async fn set_up_db(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.sqlx_logging(config.sql_logging)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opts).await?;
    tracing::info!(backend = ?db.get_database_backend(), "DB connected");

    models::schema::create_tables(&db).await?;
    tracing::info!("tables ready");
    Ok(db)
}
