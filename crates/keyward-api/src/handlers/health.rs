//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let (status, store) = match state.users.ping().await {
        Ok(()) => ("ok", "connected"),
        Err(e) => {
            warn!(error = %e, "Account store ping failed");
            ("degraded", "unreachable")
        }
    };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.to_string(),
    }))
}
