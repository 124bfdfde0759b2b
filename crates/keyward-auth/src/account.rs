//! Account-status lookup consulted by the authorization chain.

use std::sync::Arc;

use async_trait::async_trait;

use keyward_database::UserStore;
use keyward_entity::user::UserRole;

use crate::error::AccessError;

/// Live state of an account as seen by the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountStatus {
    /// Whether the account may use protected operations.
    pub enabled: bool,
    /// Current stored role.
    pub role: UserRole,
}

/// Read-only source of [`AccountStatus`] keyed by account id.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// `Ok(None)` when no live account has this id.
    async fn find_status(&self, subject_id: i64) -> Result<Option<AccountStatus>, AccessError>;
}

/// [`AccountStore`] over a [`UserStore`]. Soft-deleted accounts are absent.
#[derive(Debug, Clone)]
pub struct UserStoreAccounts {
    users: Arc<dyn UserStore>,
}

impl UserStoreAccounts {
    /// Wrap a user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AccountStore for UserStoreAccounts {
    async fn find_status(&self, subject_id: i64) -> Result<Option<AccountStatus>, AccessError> {
        let user = self
            .users
            .find_by_id(subject_id)
            .await
            .map_err(|e| AccessError::StoreUnavailable(e.to_string()))?;

        Ok(user.map(|u| AccountStatus {
            enabled: u.account_enabled,
            role: u.role,
        }))
    }
}
