use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse, get, post};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::AuthError;
use crate::requests::v1::auth::{LoginRequest, VerificationRequest};
use crate::responses::v1::auth::{Authenticated, ErrorMessage, PasswordAccepted, Session};
use crate::security::PasswordHasher;
use crate::services;
use crate::services::v1::auth::login::LoginOutcome;
use crate::services::v1::auth::verify::VerifyOutcome;

/// Password step of the login flow
///
/// Fail if:
/// - login is unknown or password is wrong
/// - account is blocked after too many failed attempts
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Password accepted, verification code issued", body = PasswordAccepted),
        (status = 400, description = "Unknown login or wrong password", body = ErrorMessage),
        (status = 423, description = "Account is blocked", body = ErrorMessage),
    )
)]
#[post("/login")]
pub async fn login(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    config: Data<AppConfig>,
    Json(request): Json<LoginRequest>,
) -> Result<HttpResponse, AuthError> {
    let outcome = services::v1::auth::login::login(&db, &hasher, &config.auth, request).await?;

    Ok(match outcome {
        LoginOutcome::Accepted(accepted) => HttpResponse::Ok().json(accepted),
        LoginOutcome::InvalidCredentials => {
            HttpResponse::BadRequest().json(ErrorMessage::invalid_credentials())
        }
        LoginOutcome::Blocked => {
            HttpResponse::build(StatusCode::LOCKED).json(ErrorMessage::blocked())
        }
    })
}

/// Verification step of the login flow
///
/// Fail if:
/// - no code was issued for the login
/// - the code is wrong, already consumed or expired
/// - the account is blocked
#[utoipa::path(
    post,
    path = "/verification",
    tag = "Auth",
    request_body = VerificationRequest,
    responses(
        (status = 200, description = "Code confirmed, session created", body = Authenticated),
        (status = 400, description = "Wrong, consumed or expired code", body = ErrorMessage),
        (status = 423, description = "Account is blocked", body = ErrorMessage),
    )
)]
#[post("/verification")]
pub async fn verification(
    db: Data<DatabaseConnection>,
    config: Data<AppConfig>,
    Json(request): Json<VerificationRequest>,
) -> Result<HttpResponse, AuthError> {
    let outcome = services::v1::auth::verify::verify(&db, &config.auth, request).await?;

    Ok(match outcome {
        VerifyOutcome::Authenticated(authenticated) => HttpResponse::Ok().json(authenticated),
        VerifyOutcome::InvalidCode => {
            HttpResponse::BadRequest().json(ErrorMessage::invalid_code())
        }
        VerifyOutcome::Blocked => {
            HttpResponse::build(StatusCode::LOCKED).json(ErrorMessage::blocked())
        }
    })
}

/// Get current session
///
/// Fail if:
/// - token is missing or malformed
/// - session not found or expired
#[utoipa::path(
    get,
    path = "/v1/session",
    tag = "Auth",
    responses(
        (status = 200, description = "Session is live", body = Session),
        (status = 401, description = "Missing, unknown or expired token", body = ErrorMessage),
    )
)]
#[get("/v1/session")]
pub async fn session(
    db: Data<DatabaseConnection>,
    request: HttpRequest,
) -> Result<HttpResponse, AuthError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|value| Uuid::parse_str(value.trim()).ok());

    let Some(token) = token else {
        return Ok(HttpResponse::Unauthorized().json(ErrorMessage::unauthorized()));
    };

    Ok(match services::v1::auth::session::find_user(&db, token).await? {
        Some(user) => HttpResponse::Ok().json(Session { login: user.login }),
        None => HttpResponse::Unauthorized().json(ErrorMessage::unauthorized()),
    })
}
