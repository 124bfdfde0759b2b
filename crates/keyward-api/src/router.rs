//! Route definitions for the Keyward HTTP API.
//!
//! All routes are mounted under `/api`. Account routes run behind
//! `require_account`, admin routes behind `require_admin`.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and state.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes())
        .merge(account_routes(state.clone()))
        .merge(admin_routes(state.clone()));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Login, registration, health
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/users", post(handlers::user::register))
        .route("/health", get(handlers::health::health))
}

/// The caller's own account
fn account_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users/me",
            get(handlers::user::get_me)
                .put(handlers::user::update_me)
                .delete(handlers::user::delete_me),
        )
        .route("/users/me/password", put(handlers::user::change_password))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_account,
        ))
}

/// Account administration
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::list_users))
        .route("/admin/users/{id}", put(handlers::admin::update_user))
        .route("/admin/roles", get(handlers::admin::list_roles))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_admin,
        ))
}
