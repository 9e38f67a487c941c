pub mod app;
pub mod auth;

pub use app::{AppConfig, AppMetadata, DatabaseConfig, ServerConfig};
pub use auth::{Argon2Config, AuthConfig};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Source(#[from] ::config::ConfigError),
}

/// Structural validation of a configuration section, run once at startup.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
