use utoipa::OpenApi;

use crate::{controllers, requests, responses};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Auth"),
        (name = "User"),
        (name = "Health"),
    ),
    paths(
        controllers::v1::auth::login,
        controllers::v1::auth::verification,
        controllers::v1::auth::session,

        controllers::v1::user::unblock,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        requests::v1::auth::LoginRequest,
        requests::v1::auth::VerificationRequest,

        responses::v1::auth::PasswordAccepted,
        responses::v1::auth::Authenticated,
        responses::v1::auth::Session,
        responses::v1::auth::ErrorMessage,
        responses::v1::user::User,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
