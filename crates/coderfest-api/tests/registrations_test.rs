//! Integration tests for the read path, health check, and bearer auth.

mod helpers;

use axum::http::StatusCode;
use coderfest_core::models::{HealthResponse, RegistrationsResponse};
use serde_json::Value;

use helpers::{setup_test_app, valid_form, TEST_API_KEY};

#[tokio::test]
async fn empty_listing_succeeds() {
    let app = setup_test_app().await;

    let response = app
        .server
        .get("/registrations")
        .authorization_bearer(TEST_API_KEY)
        .await;
    response.assert_status_ok();

    let body: RegistrationsResponse = response.json();
    assert!(body.success);
    assert!(body.registrations.is_empty());
}

#[tokio::test]
async fn listing_returns_every_registration() {
    let app = setup_test_app().await;

    for team_size in 3..=5 {
        app.server
            .post("/register")
            .authorization_bearer(TEST_API_KEY)
            .multipart(valid_form(team_size))
            .await
            .assert_status_ok();
    }

    let body: RegistrationsResponse = app
        .server
        .get("/registrations")
        .authorization_bearer(TEST_API_KEY)
        .await
        .json();
    assert_eq!(body.registrations.len(), 3);
    let mut sizes: Vec<usize> = body
        .registrations
        .iter()
        .map(|r| r.students.len())
        .collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![3, 4, 5]);
}

#[tokio::test]
async fn health_check_is_public() {
    let app = setup_test_app().await;

    let response = app.server.get("/health").await;
    response.assert_status_ok();

    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.service, "Coder Fest 2025 Registration");
}

#[tokio::test]
async fn protected_routes_require_bearer_token() {
    let app = setup_test_app().await;

    let response = app.server.get("/registrations").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing authorization header");

    let response = app
        .server
        .post("/register")
        .multipart(valid_form(3))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_bearer_token_is_rejected() {
    let app = setup_test_app().await;

    let response = app
        .server
        .get("/registrations")
        .authorization_bearer("not-the-key")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid API key");
}
