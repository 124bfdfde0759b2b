//! Account self-service handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use keyward_core::error::AppError;

use crate::dto::request::{ChangePasswordRequest, RegisterRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LoginResponse>>), AppError> {
    let result = state
        .account_service
        .register(&req.username, &req.email, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(result.into()))))
}

/// GET /api/users/me
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.account_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.account_service.update_profile(&auth, req.into()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.account_service.change_password(&auth, &req.password).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed".to_string(),
    })))
}

/// DELETE /api/users/me
pub async fn delete_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.account_service.delete_account(&auth).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Account deleted".to_string(),
    })))
}
