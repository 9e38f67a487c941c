use actix_web::get;
use actix_web::web::{self, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;

pub fn route(app: &mut ServiceConfig) {
    app.service(index);
    // Auth
    app.service(controllers::v1::auth::login);
    app.service(controllers::v1::auth::verification);
    app.service(controllers::v1::auth::session);
    // User
    app.service(controllers::v1::user::unblock);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    // must at the end!
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Authentication", "/api.json"),
        Definition::openapi(),
    )]));
}

#[get("/")]
pub async fn index() -> &'static str {
    "Bank Authentication Service"
}
