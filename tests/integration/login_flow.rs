//! End-to-end tests of the happy path and the password-step failures.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use bank_auth::requests::v1::auth::{LoginRequest, VerificationRequest};
use bank_auth::responses::v1::auth::{Authenticated, ErrorMessage, PasswordAccepted, Session};
use bank_auth::services::v1::auth::reset;
use bank_auth::testing::{instance, setup};

/// The seeded default account walks the whole protocol:
/// password, verification code, session introspection, logout.
#[actix_web::test]
async fn test_complete_login_flow_with_seeded_user() {
    let (service, db) = bank_auth::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(LoginRequest {
            login: "vasya".to_string(),
            password: "qwerty123".to_string(),
        })
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Password step should pass");

    let accepted: PasswordAccepted = read_body_json(resp).await;
    assert_eq!(accepted.login, "vasya");

    // The code travels out-of-band; tests read it from the store.
    let code = instance::verification_code(&db, "vasya").await;

    let req = TestRequest::post()
        .uri("/verification")
        .set_json(VerificationRequest {
            login: "vasya".to_string(),
            code,
        })
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Code should be accepted");

    let authenticated: Authenticated = read_body_json(resp).await;
    assert_eq!(authenticated.login, "vasya");
    assert!(!authenticated.token.is_empty());

    let req = TestRequest::get()
        .uri("/v1/session")
        .insert_header(("Authorization", format!("Bearer {}", authenticated.token)))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let session: Session = read_body_json(resp).await;
    assert_eq!(session.login, "vasya");

    // After the sessions are purged the token no longer resolves.
    reset::purge_sessions(&db, "vasya").await.unwrap();

    let req = TestRequest::get()
        .uri("/v1/session")
        .insert_header(("Authorization", format!("Bearer {}", authenticated.token)))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_unknown_login_is_rejected() {
    let (service, _db) = bank_auth::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(LoginRequest {
            login: "nobody".to_string(),
            password: "qwerty123".to_string(),
        })
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::invalid_credentials());
}

#[actix_web::test]
async fn test_wrong_password_is_rejected() {
    let (service, _db) = bank_auth::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(LoginRequest {
            login: "vasya".to_string(),
            password: "wrong-password".to_string(),
        })
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::invalid_credentials());
}

/// A valid password paired with somebody else's login must not pass.
#[actix_web::test]
async fn test_valid_password_of_another_account_is_rejected() {
    let (service, db) = bank_auth::service!();
    let hasher = setup::password_hasher().unwrap();

    let other =
        setup::create_test_user(&db, &hasher, &setup::random_login(), "hunter2secret").await;

    let req = TestRequest::post()
        .uri("/login")
        .set_json(LoginRequest {
            login: other.login,
            password: "qwerty123".to_string(),
        })
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::invalid_credentials());
}

#[actix_web::test]
async fn test_session_requires_well_formed_bearer_token() {
    let (service, _db) = bank_auth::service!();

    let req = TestRequest::get().uri("/v1/session").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = TestRequest::get()
        .uri("/v1/session")
        .insert_header(("Authorization", "Bearer not-a-uuid"))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
