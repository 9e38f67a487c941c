//! Verification step tests: wrong codes, reissue, replay and fixture resets.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use bank_auth::config::{AppConfig, AuthConfig};
use bank_auth::entities::v1::verification_codes;
use bank_auth::requests::v1::auth::{LoginRequest, VerificationRequest};
use bank_auth::responses::v1::auth::ErrorMessage;
use bank_auth::services::v1::auth::reset;
use bank_auth::testing::{instance, setup};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, EntityTrait};

fn password_request(login: &str) -> actix_web::test::TestRequest {
    TestRequest::post().uri("/login").set_json(LoginRequest {
        login: login.to_string(),
        password: "qwerty123".to_string(),
    })
}

fn verification_request(login: &str, code: &str) -> actix_web::test::TestRequest {
    TestRequest::post()
        .uri("/verification")
        .set_json(VerificationRequest {
            login: login.to_string(),
            code: code.to_string(),
        })
}

async fn provision(db: &DatabaseConnection) -> String {
    let hasher = setup::password_hasher().unwrap();
    let login = setup::random_login();

    setup::create_test_user(db, &hasher, &login, "qwerty123").await;

    login
}

/// A wrong code is rejected with the retry message and does not invalidate
/// the active code.
#[actix_web::test]
async fn test_wrong_code_allows_retry() {
    let (service, db) = bank_auth::service!();
    let login = provision(&db).await;

    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
    let code = instance::verification_code(&db, &login).await;

    let wrong = if code == "000000" { "000001" } else { "000000" };
    let resp = call_service(&service, verification_request(&login, wrong).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::invalid_code());

    let resp = call_service(&service, verification_request(&login, &code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

/// Wrong codes never count toward the password lockout.
#[actix_web::test]
async fn test_wrong_codes_do_not_block_the_account() {
    let (service, db) = bank_auth::service!();
    let login = provision(&db).await;

    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
    let code = instance::verification_code(&db, &login).await;
    let wrong = if code == "000000" { "000001" } else { "000000" };

    for _ in 0..5 {
        let resp = call_service(&service, verification_request(&login, wrong).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    // The password step still answers normally, not with a block.
    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
}

/// Re-running the password step supersedes the previous code.
#[actix_web::test]
async fn test_new_login_supersedes_previous_code() {
    let (service, db) = bank_auth::service!();
    let login = provision(&db).await;

    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
    let first = instance::verification_code(&db, &login).await;

    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
    let second = instance::verification_code(&db, &login).await;

    let resp = call_service(&service, verification_request(&login, &first).to_request()).await;

    // The first code may coincide with the second; only distinct codes
    // prove the supersede.
    if first != second {
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let resp = call_service(&service, verification_request(&login, &second).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

/// A consumed code never verifies again.
#[actix_web::test]
async fn test_consumed_code_cannot_be_replayed() {
    let (service, db) = bank_auth::service!();
    let login = provision(&db).await;

    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
    let code = instance::verification_code(&db, &login).await;

    let resp = call_service(&service, verification_request(&login, &code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = call_service(&service, verification_request(&login, &code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::invalid_code());
}

#[actix_web::test]
async fn test_purged_code_is_rejected() {
    let (service, db) = bank_auth::service!();
    let login = provision(&db).await;

    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
    let code = instance::verification_code(&db, &login).await;

    reset::purge_codes(&db).await.unwrap();

    let resp = call_service(&service, verification_request(&login, &code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

/// With a TTL configured, a code older than the TTL verifies as invalid;
/// a fresh code from a new password step still works.
#[actix_web::test]
async fn test_expired_code_is_rejected() {
    let config = AppConfig {
        auth: AuthConfig {
            code_ttl: Some(60),
            ..AuthConfig::default()
        },
        ..AppConfig::default()
    };

    let (service, db) = bank_auth::service!(config);
    let login = provision(&db).await;

    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
    let code = instance::verification_code(&db, &login).await;

    // Backdate the issued code past the TTL.
    verification_codes::Entity::update_many()
        .col_expr(
            verification_codes::Column::IssuedAt,
            Expr::value(Utc::now().naive_utc() - chrono::Duration::seconds(120)),
        )
        .exec(&db)
        .await
        .unwrap();

    let resp = call_service(&service, verification_request(&login, &code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::invalid_code());

    let resp = call_service(&service, password_request(&login).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");
    let code = instance::verification_code(&db, &login).await;

    let resp = call_service(&service, verification_request(&login, &code).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

/// Verification without a prior password step has no code to match.
#[actix_web::test]
async fn test_verification_without_login_is_rejected() {
    let (service, db) = bank_auth::service!();
    let login = provision(&db).await;

    let resp = call_service(&service, verification_request(&login, "123456").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::invalid_code());
}
