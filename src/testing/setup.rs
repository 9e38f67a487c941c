use bank_auth_migration::MigratorTrait;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::config::auth::{Argon2Config, AuthConfig};
use crate::database;
use crate::entities::v1::users;
use crate::security::PasswordHasher;
use crate::services;

/// Returns an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh database, so tests are isolated from each
/// other. The seeded default user is present.
///
/// # Panics
/// Panics if the connection or a migration fails. Tests should fail fast
/// if setup is broken.
pub async fn database() -> DatabaseConnection {
    let db = database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    bank_auth_migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Returns a PasswordHasher with reduced Argon2 parameters
///
/// Production parameters are too slow for tests. The reduced settings
/// still exercise the real hashing logic.
pub fn password_hasher() -> Result<PasswordHasher, argon2::Error> {
    let config = AuthConfig {
        argon2: Argon2Config {
            memory_cost: 19456,
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
        },
        ..Default::default()
    };

    PasswordHasher::from_config(&config)
}

/// Provisions a user through the store service
///
/// # Panics
/// Panics if hashing or the insert fails.
pub async fn create_test_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    login: &str,
    password: &str,
) -> users::Model {
    services::v1::user::store::store(db, hasher, login, password)
        .await
        .expect("Failed to create test user")
}

/// Returns a random login suitable for a throwaway test user
pub fn random_login() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..8)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect();

    format!("user_{suffix}")
}
