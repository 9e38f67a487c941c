use actix_web::web::{Data, Path};
use actix_web::{HttpResponse, post};
use sea_orm::DatabaseConnection;

use crate::errors::AuthError;
use crate::responses::v1::auth::ErrorMessage;
use crate::responses::v1::user::User;
use crate::services;

/// Administrative unblock
///
/// Resets the failed attempt counter and clears the blocked flag.
///
/// Fail if:
/// - login is unknown
#[utoipa::path(
    post,
    path = "/v1/user/{login}/unblock",
    tag = "User",
    params(
        ("login" = String, Path, description = "Account login"),
    ),
    responses(
        (status = 200, description = "Account unblocked", body = User),
        (status = 404, description = "Unknown login", body = ErrorMessage),
    )
)]
#[post("/v1/user/{login}/unblock")]
pub async fn unblock(
    db: Data<DatabaseConnection>,
    login: Path<String>,
) -> Result<HttpResponse, AuthError> {
    let login = login.into_inner();

    Ok(match services::v1::user::unblock::unblock(&db, &login).await? {
        Some(user) => HttpResponse::Ok().json(User::from(user)),
        None => HttpResponse::NotFound().json(ErrorMessage::not_found()),
    })
}
