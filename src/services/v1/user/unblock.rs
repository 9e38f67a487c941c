use sea_orm::DatabaseConnection;

use crate::entities::v1::users;
use crate::errors::AuthError;

/// Administrative unblock; the only path out of the terminal blocked state.
#[tracing::instrument(skip(db))]
pub async fn unblock(
    db: &DatabaseConnection,
    login: &str,
) -> Result<Option<users::Model>, AuthError> {
    let user = users::Model::unblock(db, login.to_string()).await?;

    if user.is_some() {
        tracing::info!(login, "account unblocked by administrative reset");
    }

    Ok(user)
}
