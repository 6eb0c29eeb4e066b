mod common;

use axum::http::{Method, StatusCode};
use common::{spawn_app, SECRET};
use fintrack_core::users::TokenIssuerTrait;
use fintrack_server::auth::AuthManager;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn register_then_login() {
    let app = spawn_app().await;

    let register = app
        .request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "name": "Ada", "email": "ada@example.com", "password": "pw-123" })),
        )
        .await;
    assert_eq!(register.status, StatusCode::CREATED);
    let body = register.json();
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let login = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "ada@example.com", "password": "pw-123" })),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.json()["token"].as_str().unwrap().to_string();

    let expenses = app
        .request(Method::GET, "/expenses", Some(&token), None)
        .await;
    assert_eq!(expenses.status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = spawn_app().await;
    app.register("Ada", "ada@example.com", "pw-123").await;

    let again = app
        .request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "name": "Other", "email": "ada@example.com", "password": "x" })),
        )
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.json()["message"], "Email is already registered");
}

#[tokio::test]
async fn invalid_registration_is_bad_request() {
    let app = spawn_app().await;
    let response = app
        .request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "name": "Ada", "email": "not-an-email", "password": "pw" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], 400);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = spawn_app().await;
    app.register("Ada", "ada@example.com", "pw-123").await;

    let wrong_password = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "ada@example.com", "password": "nope" })),
        )
        .await;
    let unknown_email = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "ghost@example.com", "password": "pw-123" })),
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.json()["message"], "Invalid email or password");
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let app = spawn_app().await;

    let missing = app.request(Method::GET, "/expenses", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request(Method::GET, "/categories", Some("garbage"), None)
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let health = app.request(Method::GET, "/healthz", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.text(), "ok");
}

#[tokio::test]
async fn token_for_unknown_user_is_not_found() {
    let app = spawn_app().await;
    let token = AuthManager::new(&SECRET, Duration::from_secs(60))
        .issue_token("ghost@example.com")
        .unwrap();

    let response = app
        .request(Method::GET, "/expenses", Some(&token), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["message"], "User not found");
}
