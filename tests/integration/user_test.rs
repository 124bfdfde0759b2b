//! Integration tests for registration and account self-service.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_returns_token_and_default_role() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "  NewUser ",
                "email": "new@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["user"]["username"], "newuser");
    assert_eq!(response.body["data"]["user"]["role"], "default");
    assert_eq!(response.body["data"]["user"]["account_enabled"], true);

    let token = response.body["data"]["token"].as_str().unwrap();
    let me = app.request("GET", "/api/users/me", None, Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], "new@test.com");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new();
    app.register("dupe", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "DUPE",
                "email": "another@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new();

    let cases = [
        serde_json::json!({"username": "", "email": "a@test.com", "password": "password123"}),
        serde_json::json!({"username": "seventeen_chars__", "email": "a@test.com", "password": "password123"}),
        serde_json::json!({"username": "valid", "email": "not-an-email", "password": "password123"}),
        serde_json::json!({"username": "valid", "email": "a@test.com", "password": ""}),
        serde_json::json!({"username": "valid", "email": "a@test.com", "password": "x".repeat(33)}),
    ];

    for body in cases {
        let response = app.request("POST", "/api/users", Some(body.clone()), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    let (_, token) = app.register("profiler", "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(serde_json::json!({"phone": "+14155550100"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["phone"], "+14155550100");
    assert_eq!(response.body["data"]["email"], "profiler@test.com");

    let bad_phone = app
        .request(
            "PUT",
            "/api/users/me",
            Some(serde_json::json!({"phone": "0800-EXAMPLE"})),
            Some(&token),
        )
        .await;
    assert_eq!(bad_phone.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_profile_email_conflict() {
    let app = TestApp::new();
    app.register("first", "password123").await;
    let (_, token) = app.register("second", "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(serde_json::json!({"email": "first@test.com"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new();
    let (_, token) = app.register("rotator", "old-password").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me/password",
            Some(serde_json::json!({"password": "new-password"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "Password changed");

    let old = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "rotator", "password": "old-password"})),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);

    app.login("rotator", "new-password").await;
}

#[tokio::test]
async fn test_delete_account_frees_username() {
    let app = TestApp::new();
    let (_, token) = app.register("goner", "password123").await;

    let response = app.request("DELETE", "/api/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "Account deleted");

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "goner", "password": "password123"})),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);

    app.register("goner", "password456").await;
}
