use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::entities::v1::{sessions, users};
use crate::errors::AuthError;

/// Resolve a bearer token to its account, if the session is still live.
#[tracing::instrument(skip(db))]
pub async fn find_user(
    db: &DatabaseConnection,
    token: Uuid,
) -> Result<Option<users::Model>, AuthError> {
    Ok(sessions::Model::user(db, token).await?)
}
