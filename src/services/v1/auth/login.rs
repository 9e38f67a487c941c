//! Password step of the two-step login protocol.
//!
//! The blocked flag is checked before the password is evaluated, so a
//! blocked account answers `Blocked` regardless of what was submitted and
//! never gets a code issued.

use sea_orm::DatabaseConnection;

use crate::config::AuthConfig;
use crate::entities::v1::{users, verification_codes};
use crate::errors::AuthError;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::PasswordAccepted;
use crate::security::{CodeGenerator, PasswordHasher};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Password matched; a verification code was issued.
    Accepted(PasswordAccepted),
    /// Unknown login or wrong password.
    InvalidCredentials,
    /// Account reached the lockout threshold earlier.
    Blocked,
}

#[tracing::instrument(skip(db, hasher, config, request), fields(login = %request.login))]
pub async fn login(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    config: &AuthConfig,
    request: LoginRequest,
) -> Result<LoginOutcome, AuthError> {
    let Some(user) = users::Model::find_by_login(db, &request.login).await? else {
        tracing::debug!("unknown login");
        return Ok(LoginOutcome::InvalidCredentials);
    };

    if user.blocked {
        tracing::warn!("attempt on blocked account");
        return Ok(LoginOutcome::Blocked);
    }

    let matches = hasher
        .verify(&request.password, &user.password)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    if !matches {
        let user =
            users::Model::record_failure(db, user.id, config.max_failed_attempts).await?;

        if user.blocked {
            tracing::warn!(attempts = user.failed_attempts, "lockout threshold reached");
        }

        return Ok(LoginOutcome::InvalidCredentials);
    }

    users::Model::record_success(db, user.id).await?;

    let code = CodeGenerator::new(config.code_length).generate();

    verification_codes::Model::issue(db, user.id, code).await?;

    tracing::info!("password accepted, verification code issued");

    Ok(LoginOutcome::Accepted(PasswordAccepted { login: user.login }))
}
