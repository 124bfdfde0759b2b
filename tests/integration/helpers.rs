//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use keyward_api::AppState;
use keyward_core::config::{AppConfig, SeedConfig};
use keyward_database::{MemoryUserRepository, UserStore};
use keyward_entity::user::AdminUpdateUser;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Account store backing the router
    pub users: Arc<dyn UserStore>,
    /// Application config
    pub config: AppConfig,
    state: AppState,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-signing-key".to_string();
        config.auth.pepper = "integration-test-pepper".to_string();
        config.auth.hash_cost = 1;
        config.auth.hash_memory_kib = 1024;

        let users: Arc<dyn UserStore> = Arc::new(MemoryUserRepository::new());
        let state = AppState::new(config.clone(), Arc::clone(&users)).expect("Failed to build state");
        let router = keyward_api::build_app(state.clone());

        Self {
            router,
            users,
            config,
            state,
        }
    }

    /// Register an account through the API and return `(id, token)`
    pub async fn register(&self, username: &str, password: &str) -> (i64, String) {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({
                    "username": username,
                    "email": format!("{username}@test.com"),
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        let id = response.body["data"]["user"]["id"]
            .as_i64()
            .expect("No user id in registration response");
        let token = response.body["data"]["token"]
            .as_str()
            .expect("No token in registration response")
            .to_string();
        (id, token)
    }

    /// Seed an admin account and return its token
    pub async fn admin_token(&self, username: &str, password: &str) -> String {
        let seed = SeedConfig {
            admin_username: Some(username.to_string()),
            admin_password: Some(password.to_string()),
            admin_email: None,
        };
        keyward_service::seed_admin(&self.state.users, &self.state.password_hasher, &seed)
            .await
            .expect("Failed to seed admin");
        self.login(username, password).await
    }

    /// Login and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Flip an account's enabled flag directly in the store
    pub async fn set_enabled(&self, user_id: i64, enabled: bool) {
        self.users
            .admin_update(
                user_id,
                AdminUpdateUser {
                    account_enabled: Some(enabled),
                    ..AdminUpdateUser::default()
                },
            )
            .await
            .expect("Failed to update account");
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        self.send(req, body).await
    }

    /// Make a request with a raw `Authorization` header value
    pub async fn request_with_header(&self, method: &str, path: &str, authorization: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Authorization", authorization);
        self.send(req, None).await
    }

    async fn send(&self, req: axum::http::request::Builder, body: Option<Value>) -> TestResponse {
        let req = match body {
            Some(b) => req
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&b).expect("Failed to serialize body"))),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
