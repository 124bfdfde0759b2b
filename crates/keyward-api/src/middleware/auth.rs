//! Authorization gates for protected routes.
//!
//! Each gate runs [`AuthorizationChain`](keyward_auth::AuthorizationChain)
//! and, on success, stores the caller's [`Identity`](keyward_auth::Identity)
//! in the request extensions for [`AuthUser`](crate::extractors::AuthUser).

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use keyward_auth::Access;
use keyward_core::error::AppError;

use crate::state::AppState;

/// Gate for routes open to any enabled account.
pub async fn require_account(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(state, request, next, Access::Account).await
}

/// Gate for admin-only routes.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(state, request, next, Access::Admin).await
}

async fn gate(state: AppState, mut request: Request, next: Next, access: Access) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let identity = state.auth_chain.authorize(header.as_deref(), access).await?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
