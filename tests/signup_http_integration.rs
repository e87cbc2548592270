//! Integration tests for the signup HTTP endpoint.
//!
//! These tests drive the fully wired router:
//! real Argon2id hashing, real email syntax checks, in-memory persistence.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use signup_api::adapters::http::{app_router, SignUpController};
use signup_api::adapters::{Argon2Encrypter, EmailValidatorAdapter, InMemoryAccountRepository};
use signup_api::application::AddAccountHandler;
use signup_api::config::ServerConfig;
use signup_api::domain::foundation::AccountId;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    repository: InMemoryAccountRepository,
}

fn test_app() -> TestApp {
    let repository = InMemoryAccountRepository::new();
    let encrypter = Argon2Encrypter::new(64, 1, 1).unwrap();
    let add_account = Arc::new(AddAccountHandler::new(
        Arc::new(encrypter),
        Arc::new(repository.clone()),
    ));
    let controller = Arc::new(SignUpController::new(
        Arc::new(EmailValidatorAdapter::new()),
        add_account,
    ));

    TestApp {
        router: app_router(controller, &ServerConfig::default()),
        repository,
    }
}

fn signup(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_body() -> Value {
    json!({
        "name": "valid_name",
        "email": "valid_email@mail.com",
        "password": "valid_password",
        "passwordConfirmation": "valid_password",
    })
}

async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn valid_signup_returns_account_with_hashed_password() {
    let app = test_app();

    let response = app.router.oneshot(signup(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["name"], "valid_name");
    assert_eq!(body["email"], "valid_email@mail.com");
    assert!(!body["id"].as_str().unwrap().is_empty());

    let hash = body["password"].as_str().unwrap();
    assert_ne!(hash, "valid_password");
    let parsed = PasswordHash::new(hash).unwrap();
    assert!(Argon2::default()
        .verify_password(b"valid_password", &parsed)
        .is_ok());
}

#[tokio::test]
async fn valid_signup_persists_what_it_returns() {
    let app = test_app();

    let response = app.router.oneshot(signup(valid_body())).await.unwrap();
    let body = read_json(response).await;

    let id = AccountId::new(body["id"].as_str().unwrap());
    let stored = app.repository.get(&id).await.unwrap();
    assert_eq!(app.repository.len().await, 1);
    assert_eq!(stored.name, "valid_name");
    assert_eq!(stored.email, "valid_email@mail.com");
    assert_eq!(stored.password, body["password"].as_str().unwrap());
}

// =============================================================================
// Rejections
// =============================================================================

#[tokio::test]
async fn missing_field_returns_400_error_shape() {
    let app = test_app();
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("password");

    let response = app.router.oneshot(signup(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "name": "MissingParamError", "message": "Missing param: password" })
    );
    assert!(app.repository.is_empty().await);
}

#[tokio::test]
async fn invalid_email_returns_400() {
    let app = test_app();
    let mut body = valid_body();
    body["email"] = json!("invalid_email");

    let response = app.router.oneshot(signup(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "name": "InvalidParamError", "message": "Invalid param: email" })
    );
    assert!(app.repository.is_empty().await);
}

#[tokio::test]
async fn mismatched_confirmation_returns_400() {
    let app = test_app();
    let mut body = valid_body();
    body["passwordConfirmation"] = json!("other_password");

    let response = app.router.oneshot(signup(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({
            "name": "InvalidParamError",
            "message": "Invalid param: passwordConfirmation"
        })
    );
}

#[tokio::test]
async fn malformed_json_is_rejected_before_signup() {
    let app = test_app();

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/signup")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\":"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert!(app.repository.is_empty().await);
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn responses_carry_cors_header() {
    let app = test_app();
    let mut request = signup(valid_body());
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://localhost:5173".parse().unwrap());

    let response = app.router.oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
