//! Verification step of the two-step login protocol.
//!
//! Wrong digits, a missing code and an expired code all collapse into
//! `InvalidCode`; a wrong code does not touch the lockout counter and
//! leaves the active code in place, so the caller may retry. A blocked
//! account answers `Blocked` and never trades a code for a session.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::config::AuthConfig;
use crate::entities::v1::{sessions, users, verification_codes};
use crate::errors::AuthError;
use crate::requests::v1::auth::VerificationRequest;
use crate::responses::v1::auth::Authenticated;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Code confirmed; a session was issued.
    Authenticated(Authenticated),
    /// No active code, expired code, or wrong code.
    InvalidCode,
    /// Account reached the lockout threshold; the pending code is unusable.
    Blocked,
}

#[tracing::instrument(skip(db, config, request), fields(login = %request.login))]
pub async fn verify(
    db: &DatabaseConnection,
    config: &AuthConfig,
    request: VerificationRequest,
) -> Result<VerifyOutcome, AuthError> {
    let Some(user) = users::Model::find_by_login(db, &request.login).await? else {
        tracing::debug!("unknown login");
        return Ok(VerifyOutcome::InvalidCode);
    };

    if user.blocked {
        tracing::warn!("verification attempt on blocked account");
        return Ok(VerifyOutcome::Blocked);
    }

    let Some(code) = verification_codes::Model::find_active(db, user.id).await? else {
        tracing::debug!("no active verification code");
        return Ok(VerifyOutcome::InvalidCode);
    };

    if let Some(ttl) = config.code_ttl {
        let deadline = code.issued_at + chrono::Duration::seconds(ttl as i64);

        if Utc::now().naive_utc() > deadline {
            tracing::debug!("verification code expired");
            return Ok(VerifyOutcome::InvalidCode);
        }
    }

    if code.code != request.code {
        tracing::debug!("verification code mismatch");
        return Ok(VerifyOutcome::InvalidCode);
    }

    let login = user.login.clone();
    let lifetime = chrono::Duration::seconds(config.session_lifetime as i64);

    // The conditional consume decides the winner: of two concurrent
    // submissions of the same code, exactly one creates a session.
    let session = db
        .transaction::<_, Option<sessions::Model>, DbErr>(move |db| {
            Box::pin(async move {
                if !verification_codes::Model::consume(db, code.id).await? {
                    return Ok(None);
                }

                let session =
                    sessions::Model::create(db, user.id, Some(Utc::now().naive_utc() + lifetime))
                        .await?;

                Ok(Some(session))
            })
        })
        .await?;

    let Some(session) = session else {
        tracing::debug!("verification code already consumed");
        return Ok(VerifyOutcome::InvalidCode);
    };

    tracing::info!("verification code confirmed, session created");

    Ok(VerifyOutcome::Authenticated(Authenticated {
        token: session.id.to_string(),
        login,
    }))
}
