//! Account provisioning.
//!
//! Provisioning is outside the login protocol; it exists for seeding and
//! for the test harness.

use sea_orm::DatabaseConnection;

use crate::entities::v1::users;
use crate::errors::AuthError;
use crate::security::PasswordHasher;

#[tracing::instrument(skip(db, hasher, password))]
pub async fn store(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    login: &str,
    password: &str,
) -> Result<users::Model, AuthError> {
    if users::Model::login_exists(db, login).await? {
        return Err(AuthError::LoginTaken(login.to_string()));
    }

    let hash = hasher
        .hash(password)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    let user = users::Model::store(db, login.to_string(), hash).await?;

    tracing::info!(login = %user.login, "account provisioned");

    Ok(user)
}
