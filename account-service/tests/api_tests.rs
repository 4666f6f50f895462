mod common;

use auth::TokenKind;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_login_refresh_flow() {
    let app = TestApp::spawn().await;

    let response = app.signup("a@b.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User created successfully");

    let response = app.login("a@b.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let access_token = body["accessToken"].as_str().unwrap().to_string();
    let refresh_token = body["refreshToken"].as_str().unwrap().to_string();

    assert_eq!(app.decode(TokenKind::Access, &access_token).subject, "a@b.com");
    assert_eq!(
        app.decode(TokenKind::Refresh, &refresh_token).subject,
        "a@b.com"
    );

    let called_at = Utc::now().timestamp();
    let response = app
        .post("/refresh-token")
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let new_access_token = body["accessToken"].as_str().unwrap();
    let claims = app.decode(TokenKind::Access, new_access_token);
    assert_eq!(claims.subject, "a@b.com");
    assert!((claims.expires_at - (called_at + 15 * 60)).abs() <= 5);

    let response = app
        .get_authenticated("/welcome", new_access_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Welcome a@b.com");
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.signup("not-an-email", "secret1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid email format");
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/signup")
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("firstName"));
    assert!(message.contains("lastName"));
    assert!(message.contains("password"));
}

#[tokio::test]
async fn test_signup_weak_password() {
    let app = TestApp::spawn().await;

    let response = app.signup("a@b.com", "12345").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Password must be at least 6 characters long");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::spawn().await;

    assert_eq!(app.signup("a@b.com", "secret1").await.status(), StatusCode::OK);

    let response = app.signup("a@b.com", "another1").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_signup_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/signup")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid input format");
}

#[tokio::test]
async fn test_login_failures_have_identical_bodies() {
    let app = TestApp::spawn().await;
    app.signup("a@b.com", "secret1").await;

    let wrong_password = app.login("a@b.com", "wrong-password").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = wrong_password.text().await.unwrap();

    let unknown_email = app.login("nobody@b.com", "secret1").await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = unknown_email.text().await.unwrap();

    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/login")
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_token_required() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/refresh-token")
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::spawn().await;
    let access_token = app.issuer.issue_access("a@b.com").unwrap();

    let response = app
        .post("/refresh-token")
        .json(&json!({ "refreshToken": access_token }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_expired_token() {
    let app = TestApp::spawn().await;
    let refresh_token = app
        .issuer
        .issue_at(TokenKind::Refresh, "a@b.com", Utc::now() - Duration::hours(25))
        .unwrap();

    let response = app
        .post("/refresh-token")
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn test_welcome_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/welcome")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Missing Authorization header");
}

#[tokio::test]
async fn test_welcome_rejects_refresh_token() {
    let app = TestApp::spawn().await;
    let refresh_token = app.issuer.issue_refresh("a@b.com").unwrap();

    let response = app
        .get_authenticated("/welcome", &refresh_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_welcome_rejects_expired_access_token() {
    let app = TestApp::spawn().await;
    let access_token = app
        .issuer
        .issue_at(TokenKind::Access, "a@b.com", Utc::now() - Duration::minutes(15))
        .unwrap();

    let response = app
        .get_authenticated("/welcome", &access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn test_welcome_accepts_lowercase_bearer_scheme() {
    let app = TestApp::spawn().await;
    let access_token = app.issuer.issue_access("a@b.com").unwrap();

    let response = app
        .get("/welcome")
        .header("authorization", format!("bearer {}", access_token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Welcome a@b.com");
}
