use sea_orm::DatabaseConnection;

use crate::entities::v1::{users, verification_codes};

/// Reads the currently active verification code for a login
///
/// Tests cannot see the code on the wire, so they fetch it straight from
/// the store, like an operator would.
///
/// # Panics
/// Panics if the login is unknown or no unconsumed code exists.
pub async fn verification_code(db: &DatabaseConnection, login: &str) -> String {
    let user = users::Model::find_by_login(db, login)
        .await
        .expect("Failed to query user")
        .expect("User not found");

    verification_codes::Model::find_active(db, user.id)
        .await
        .expect("Failed to query verification codes")
        .expect("No active verification code")
        .code
}

/// Builds an initialized actix test service backed by a fresh in-memory
/// database, returning `(service, db)`. Takes an optional `AppConfig`
/// expression for tests that need non-default settings.
#[macro_export]
macro_rules! service {
    () => {
        $crate::service!($crate::config::AppConfig::default())
    };
    ($config:expr) => {{
        let db = $crate::testing::setup::database().await;
        let hasher = $crate::testing::setup::password_hasher().unwrap();
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new(hasher))
            .app_data(::actix_web::web::Data::new($config))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
