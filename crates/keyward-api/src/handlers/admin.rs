//! Admin handlers.

use axum::Json;
use axum::extract::{Path, State};

use keyward_core::error::AppError;

use crate::dto::request::AdminUpdateUserRequest;
use crate::dto::response::{ApiResponse, RoleResponse, UserResponse};
use crate::extractors::path::parse_user_id;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    let users = state.admin_service.list_users().await?;
    Ok(Json(ApiResponse::ok(users.into_iter().map(Into::into).collect())))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<AdminUpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user_id = parse_user_id(&id)?;
    let user = state
        .admin_service
        .update_user(&auth, user_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/admin/roles
pub async fn list_roles(State(state): State<AppState>) -> Json<ApiResponse<Vec<RoleResponse>>> {
    let roles = state.admin_service.list_roles();
    Json(ApiResponse::ok(roles.into_iter().map(Into::into).collect()))
}
