//! `AuthUser` extractor: the identity attached by the authorization gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use keyward_auth::Identity;
use keyward_core::error::AppError;

/// Authenticated caller of a gated route.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Identity);

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Present only when the route sits behind a gate.
        parts
            .extensions
            .get::<Identity>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication("Authentication required"))
    }
}
