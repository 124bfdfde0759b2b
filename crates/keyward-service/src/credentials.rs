//! Blocking-pool wrappers around the credential hasher.

use std::sync::Arc;

use keyward_auth::PasswordHasher;
use keyward_core::error::AppError;
use keyward_core::result::AppResult;

/// Trim and lowercase a username.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Hash `identity ‖ secret` off the async worker threads.
pub async fn hash(hasher: &Arc<PasswordHasher>, identity: &str, secret: &str) -> AppResult<String> {
    let hasher = Arc::clone(hasher);
    let (identity, secret) = (identity.to_string(), secret.to_string());
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&identity, &secret))
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))??;
    Ok(hash)
}

/// Verify an attempt against a stored hash off the async worker threads.
pub async fn verify(
    hasher: &Arc<PasswordHasher>,
    stored: &str,
    identity: &str,
    secret: &str,
) -> AppResult<bool> {
    let hasher = Arc::clone(hasher);
    let (stored, identity, secret) = (stored.to_string(), identity.to_string(), secret.to_string());
    let matched = tokio::task::spawn_blocking(move || hasher.verify(&stored, &identity, &secret))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))??;
    Ok(matched)
}

/// Spend a full verification on an unknown identity, always rejecting.
pub async fn verify_decoy(hasher: &Arc<PasswordHasher>, identity: &str, secret: &str) -> AppResult<bool> {
    let hasher = Arc::clone(hasher);
    let (identity, secret) = (identity.to_string(), secret.to_string());
    let matched = tokio::task::spawn_blocking(move || hasher.verify_decoy(&identity, &secret))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))??;
    Ok(matched)
}
