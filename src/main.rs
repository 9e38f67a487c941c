#![deny(warnings)]

use actix_web::web::Data;
use actix_web::{App, HttpServer};
use bank_auth::security::PasswordHasher;
use bank_auth::{config, database, router};
use bank_auth_migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load()?;
    let db = database::connect(&config.database).await?;

    Migrator::up(&db, None).await?;

    let hasher = PasswordHasher::from_config(&config.auth)
        .map_err(|e| anyhow::anyhow!("invalid argon2 parameters: {e}"))?;

    let address = (config.server.host.clone(), config.server.port);

    tracing::info!(host = %address.0, port = address.1, "starting bank-auth");

    let db = Data::new(db);
    let hasher = Data::new(hasher);
    let config = Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .app_data(hasher.clone())
            .app_data(config.clone())
            .configure(router::route)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
