//! Auth handlers.

use axum::Json;
use axum::extract::State;

use keyward_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let result = state.account_service.login(&req.username, &req.password).await?;
    Ok(Json(ApiResponse::ok(result.into())))
}
