mod config;
mod routes;
mod setup;

use std::io;

use actix_web::{web, App, HttpServer};
use config::AppConfig;
use graphql::build_schema;
use setup::{init_tracing, set_up_db};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    init_tracing(&config);

    let db = set_up_db(&config).await.map_err(|e| {
        tracing::error!(error = %e, "failed to set up database");
        io::Error::other(e)
    })?;

    // Build the Schema with the database connection in the GraphQL global context
    let schema = build_schema(db);

    let bind = (config.host.clone(), config.port);
    tracing::info!(host = %bind.0, port = bind.1, "starting postboard");

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(&config))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(schema.clone()))
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
