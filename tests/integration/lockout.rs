//! Lockout policy tests.
//!
//! Three wrong passwords block the account. The block is observed on the
//! next attempt, answers regardless of the submitted password, and only an
//! administrative unblock lifts it.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use bank_auth::requests::v1::auth::{LoginRequest, VerificationRequest};
use bank_auth::responses::v1::auth::ErrorMessage;
use bank_auth::responses::v1::user::User;
use bank_auth::testing::{instance, setup};
use serial_test::serial;

fn login_request(login: &str, password: &str) -> actix_web::test::TestRequest {
    TestRequest::post().uri("/login").set_json(LoginRequest {
        login: login.to_string(),
        password: password.to_string(),
    })
}

#[actix_web::test]
#[serial]
async fn test_third_failure_blocks_even_correct_password() {
    let (service, db) = bank_auth::service!();
    let hasher = setup::password_hasher().unwrap();
    let login = setup::random_login();

    setup::create_test_user(&db, &hasher, &login, "qwerty123").await;

    // Each wrong attempt answers with invalid credentials, not with the
    // block; the block only shows on the attempt after the third failure.
    for _ in 0..3 {
        let resp = call_service(&service, login_request(&login, "wrong").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorMessage = read_body_json(resp).await;
        assert_eq!(body, ErrorMessage::invalid_credentials());
    }

    let resp = call_service(&service, login_request(&login, "qwerty123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::LOCKED);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::blocked());
}

#[actix_web::test]
#[serial]
async fn test_blocked_account_answers_blocked_for_any_password() {
    let (service, db) = bank_auth::service!();
    let hasher = setup::password_hasher().unwrap();
    let login = setup::random_login();

    setup::create_test_user(&db, &hasher, &login, "qwerty123").await;

    for _ in 0..3 {
        call_service(&service, login_request(&login, "wrong").to_request()).await;
    }

    let resp = call_service(&service, login_request(&login, "still-wrong").to_request()).await;
    assert_eq!(resp.status(), StatusCode::LOCKED);

    let resp = call_service(&service, login_request(&login, "qwerty123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::LOCKED);
}

/// A code issued before the block must not mint a session afterwards.
#[actix_web::test]
#[serial]
async fn test_blocked_account_cannot_verify_pending_code() {
    let (service, db) = bank_auth::service!();
    let hasher = setup::password_hasher().unwrap();
    let login = setup::random_login();

    setup::create_test_user(&db, &hasher, &login, "qwerty123").await;

    let resp = call_service(&service, login_request(&login, "qwerty123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let code = instance::verification_code(&db, &login).await;

    for _ in 0..3 {
        call_service(&service, login_request(&login, "wrong").to_request()).await;
    }

    let req = TestRequest::post()
        .uri("/verification")
        .set_json(VerificationRequest {
            login: login.clone(),
            code,
        })
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::LOCKED);

    let body: ErrorMessage = read_body_json(resp).await;
    assert_eq!(body, ErrorMessage::blocked());
}

/// A successful password resets the counter, so failures never accumulate
/// across successful logins.
#[actix_web::test]
#[serial]
async fn test_successful_login_resets_failure_counter() {
    let (service, db) = bank_auth::service!();
    let hasher = setup::password_hasher().unwrap();
    let login = setup::random_login();

    setup::create_test_user(&db, &hasher, &login, "qwerty123").await;

    for _ in 0..2 {
        let resp = call_service(&service, login_request(&login, "wrong").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let resp = call_service(&service, login_request(&login, "qwerty123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Two fresh failures again stay below the threshold.
    for _ in 0..2 {
        let resp = call_service(&service, login_request(&login, "wrong").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let resp = call_service(&service, login_request(&login, "qwerty123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
#[serial]
async fn test_unblock_restores_login() {
    let (service, db) = bank_auth::service!();
    let hasher = setup::password_hasher().unwrap();
    let login = setup::random_login();

    setup::create_test_user(&db, &hasher, &login, "qwerty123").await;

    for _ in 0..3 {
        call_service(&service, login_request(&login, "wrong").to_request()).await;
    }

    let resp = call_service(&service, login_request(&login, "qwerty123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::LOCKED);

    let req = TestRequest::post()
        .uri(&format!("/v1/user/{login}/unblock"))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let user: User = read_body_json(resp).await;
    assert_eq!(user.login, login);
    assert_eq!(user.failed_attempts, 0);
    assert!(!user.blocked);

    let resp = call_service(&service, login_request(&login, "qwerty123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
#[serial]
async fn test_unblock_unknown_login_is_not_found() {
    let (service, _db) = bank_auth::service!();

    let req = TestRequest::post()
        .uri("/v1/user/nobody/unblock")
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
