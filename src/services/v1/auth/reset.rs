//! Fixture reset operations.
//!
//! These back the between-run cleanup the original test suite performed with
//! raw SQL; they are not part of the login protocol itself.

use sea_orm::DatabaseConnection;

use crate::entities::v1::{sessions, users, verification_codes};
use crate::errors::AuthError;

/// Drop every issued verification code.
#[tracing::instrument(skip(db))]
pub async fn purge_codes(db: &DatabaseConnection) -> Result<(), AuthError> {
    verification_codes::Model::purge_all(db).await?;

    Ok(())
}

/// Drop every session of the given login. Unknown logins are a no-op.
#[tracing::instrument(skip(db))]
pub async fn purge_sessions(db: &DatabaseConnection, login: &str) -> Result<(), AuthError> {
    if let Some(user) = users::Model::find_by_login(db, login).await? {
        sessions::Model::logout(db, user.id).await?;
    }

    Ok(())
}
