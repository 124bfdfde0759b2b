//! Ordered authorization chain for protected operations.
//!
//! 1. bearer token extraction
//! 2. token validation
//! 3. account status (exists and enabled)
//! 4. role, for admin operations only
//!
//! Each step runs only after the previous one passed, so a forged token
//! never reaches the account lookup.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::account::AccountStore;
use crate::error::AccessError;
use crate::jwt::{Identity, JwtDecoder};

/// Access level required by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any enabled account.
    Account,
    /// Enabled account whose token carries the admin role.
    Admin,
}

/// Composes the token validator with account and role checks.
#[derive(Clone)]
pub struct AuthorizationChain {
    decoder: JwtDecoder,
    accounts: Arc<dyn AccountStore>,
}

impl std::fmt::Debug for AuthorizationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationChain")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl AuthorizationChain {
    /// Build a chain over a validator and an account-status source.
    pub fn new(decoder: JwtDecoder, accounts: Arc<dyn AccountStore>) -> Self {
        Self { decoder, accounts }
    }

    /// Pull the token out of an `Authorization: Bearer <token>` value.
    pub fn extract_bearer(header: Option<&str>) -> Result<&str, AccessError> {
        let mut fields = header.ok_or(AccessError::Unauthenticated)?.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some("Bearer"), Some(token), None) => Ok(token),
            _ => Err(AccessError::Unauthenticated),
        }
    }

    /// Run the chain against the raw `Authorization` header value.
    pub async fn authorize(&self, header: Option<&str>, access: Access) -> Result<Identity, AccessError> {
        let token = Self::extract_bearer(header)?;

        let identity = self.decoder.validate(token).map_err(|reason| {
            debug!(%reason, "Token rejected");
            AccessError::Unauthenticated
        })?;

        self.check_identity(identity, access).await
    }

    /// Steps 3 and 4 for an already validated identity.
    pub async fn check_identity(&self, identity: Identity, access: Access) -> Result<Identity, AccessError> {
        let status = match self.accounts.find_status(identity.subject_id).await {
            Ok(Some(status)) => status,
            Ok(None) => {
                debug!(user_id = identity.subject_id, "Token subject has no live account");
                return Err(AccessError::Unauthenticated);
            }
            Err(e) => {
                warn!(user_id = identity.subject_id, error = %e, "Account lookup failed");
                return Err(AccessError::Unauthenticated);
            }
        };

        if !status.enabled {
            debug!(user_id = identity.subject_id, "Blocked disabled account");
            return Err(AccessError::AccountDisabled);
        }

        if access == Access::Admin && !identity.is_admin() {
            return Err(AccessError::InsufficientRole);
        }

        Ok(identity)
    }
}
