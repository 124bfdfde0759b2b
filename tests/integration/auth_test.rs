//! Integration tests for login and the authorization chain.

use axum::http::StatusCode;
use chrono::Utc;

use keyward_auth::JwtEncoder;
use keyward_core::config::AuthConfig;
use keyward_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let (id, _) = app.register("testuser", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "TestUser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body["data"]["token"].as_str().is_some());
    assert_eq!(response.body["data"]["user"]["id"], id);
    assert!(response.body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("testuser2", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "testuser2", "password": "wrong"})),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "nobody", "password": "password123"})),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_login_validation() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "", "password": "x"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_disabled_account_cannot_login() {
    let app = TestApp::new();
    let (id, _) = app.register("sleepy", "password123").await;
    app.set_enabled(id, false).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "sleepy", "password": "password123"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "ACCOUNT_DISABLED");
}

#[tokio::test]
async fn test_missing_or_malformed_header() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/users/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    for header in ["Bearer", "Token abc", "Bearer a b", "Bearer not.a.jwt"] {
        let response = app.request_with_header("GET", "/api/users/me", header).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header}");
        assert_eq!(response.body["error"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_token_signed_with_other_key_rejected() {
    let app = TestApp::new();
    let (id, _) = app.register("victim", "password123").await;

    let forger = JwtEncoder::new(&AuthConfig {
        jwt_secret: "attacker-key".to_string(),
        ..AuthConfig::default()
    });
    let forged = forger.issue(id, UserRole::Admin).expect("issue");

    let response = app.request("GET", "/api/admin/users", None, Some(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new();
    let (id, _) = app.register("oldtimer", "password123").await;

    let encoder = JwtEncoder::new(&app.config.auth);
    let issued_at = Utc::now().timestamp() - app.config.auth.token_ttl_seconds as i64 - 5;
    let token = encoder
        .issue_at(id, UserRole::Default, issued_at)
        .expect("issue");

    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_chain_end_to_end() {
    let app = TestApp::new();
    let (id, token) = app.register("user42", "password123").await;

    let me = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["id"], id);
    assert_eq!(me.body["data"]["role"], "default");

    let admin = app.request("GET", "/api/admin/users", None, Some(&token)).await;
    assert_eq!(admin.status, StatusCode::FORBIDDEN);
    assert_eq!(admin.body["error"], "FORBIDDEN");

    app.set_enabled(id, false).await;
    let disabled = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(disabled.status, StatusCode::FORBIDDEN);
    assert_eq!(disabled.body["error"], "ACCOUNT_DISABLED");

    // Disabled takes precedence over the role check.
    let disabled_admin = app.request("GET", "/api/admin/users", None, Some(&token)).await;
    assert_eq!(disabled_admin.body["error"], "ACCOUNT_DISABLED");

    app.set_enabled(id, true).await;
    let again = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn test_deleted_account_token_rejected() {
    let app = TestApp::new();
    let (_, token) = app.register("leaver", "password123").await;

    let deleted = app.request("DELETE", "/api/users/me", None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let after = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "connected");
}
