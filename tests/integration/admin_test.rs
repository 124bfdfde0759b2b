//! Integration tests for admin-only routes.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_users_requires_admin() {
    let app = TestApp::new();
    let (_, user_token) = app.register("regular", "password123").await;

    let response = app.request("GET", "/api/admin/users", None, Some(&user_token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");

    let anonymous = app.request("GET", "/api/admin/users", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_as_admin() {
    let app = TestApp::new();
    let admin = app.admin_token("root", "rootpass123").await;
    app.register("alice", "password123").await;
    app.register("bob", "password123").await;

    let response = app.request("GET", "/api/admin/users", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    let users = response.body["data"].as_array().expect("user list");
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["username"], "root");
    assert_eq!(users[0]["role"], "admin");
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_admin_disables_account() {
    let app = TestApp::new();
    let admin = app.admin_token("root", "rootpass123").await;
    let (id, user_token) = app.register("target", "password123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{id}"),
            Some(serde_json::json!({"account_enabled": false})),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["account_enabled"], false);

    let me = app.request("GET", "/api/users/me", None, Some(&user_token)).await;
    assert_eq!(me.status, StatusCode::FORBIDDEN);
    assert_eq!(me.body["error"], "ACCOUNT_DISABLED");
}

#[tokio::test]
async fn test_role_comes_from_token() {
    let app = TestApp::new();
    let admin = app.admin_token("root", "rootpass123").await;
    let (id, old_token) = app.register("climber", "password123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{id}"),
            Some(serde_json::json!({"role": "admin"})),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["role"], "admin");

    // The token issued before promotion still carries the default role.
    let stale = app.request("GET", "/api/admin/roles", None, Some(&old_token)).await;
    assert_eq!(stale.status, StatusCode::FORBIDDEN);

    let fresh = app.login("climber", "password123").await;
    let roles = app.request("GET", "/api/admin/roles", None, Some(&fresh)).await;
    assert_eq!(roles.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_user_rejects_bad_input() {
    let app = TestApp::new();
    let admin = app.admin_token("root", "rootpass123").await;

    let bad_id = app
        .request(
            "PUT",
            "/api/admin/users/abc",
            Some(serde_json::json!({"account_enabled": false})),
            Some(&admin),
        )
        .await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "PUT",
            "/api/admin/users/9999",
            Some(serde_json::json!({"account_enabled": false})),
            Some(&admin),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let bad_role = app
        .request(
            "PUT",
            "/api/admin/users/1",
            Some(serde_json::json!({"role": "superuser"})),
            Some(&admin),
        )
        .await;
    assert!(bad_role.status.is_client_error());
}

#[tokio::test]
async fn test_list_roles() {
    let app = TestApp::new();
    let admin = app.admin_token("root", "rootpass123").await;

    let response = app.request("GET", "/api/admin/roles", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    let roles = response.body["data"].as_array().expect("role list");
    let names: Vec<&str> = roles.iter().filter_map(|r| r["role"].as_str()).collect();
    assert_eq!(names, ["default", "admin"]);
    assert_eq!(roles[0]["description"], "The default role for all new accounts");
}
