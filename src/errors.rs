//! Infrastructure error type.
//!
//! Authentication outcomes (wrong password, blocked account, wrong code) are
//! ordinary result values in `services::v1::auth` and never appear here.
//! `AuthError` covers the faults that are not authentication outcomes: the
//! store being unreachable, a corrupt password hash, a provisioning conflict.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Database operation failed
    #[error("database operation failed: {0}")]
    Database(#[from] DbErr),

    /// Stored password hash could not be parsed or verified
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// Provisioning conflict
    #[error("login {0} is already taken")]
    LoginTaken(String),
}

impl From<TransactionError<DbErr>> for AuthError {
    fn from(error: TransactionError<DbErr>) -> Self {
        match error {
            TransactionError::Connection(e) => AuthError::Database(e),
            TransactionError::Transaction(e) => AuthError::Database(e),
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Database(_) | AuthError::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AuthError::LoginTaken(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": "infrastructure failure",
            "message": self.to_string(),
        }))
    }
}
