//! Database connection helpers.
//!
//! Production connects through [`connect`] using the configured URL.
//! Tests use [`memory`], an in-memory SQLite database limited to a single
//! pooled connection so every query observes the same schema.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());

    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout));

    Database::connect(options).await
}

pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");

    // A second pooled connection would get its own empty in-memory database.
    options.max_connections(1);

    Database::connect(options).await
}
