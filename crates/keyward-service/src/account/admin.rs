//! Administrative account management.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use keyward_auth::Identity;
use keyward_core::result::AppResult;
use keyward_database::UserStore;
use keyward_entity::user::{AdminUpdateUser, User, UserRole};

/// A role and its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    /// Wire name of the role.
    pub name: UserRole,
    /// Human-readable description.
    pub description: &'static str,
}

/// Handles operations reserved for administrators.
///
/// Callers reach this service only through the admin gate.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    users: Arc<dyn UserStore>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Every live account.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    /// Change another account's role, contact data or enabled flag.
    pub async fn update_user(&self, actor: &Identity, user_id: i64, changes: AdminUpdateUser) -> AppResult<User> {
        let user = self.users.admin_update(user_id, changes).await?;
        info!(
            actor_id = actor.subject_id,
            user_id = user.id,
            role = %user.role,
            account_enabled = user.account_enabled,
            "Admin updated user"
        );
        Ok(user)
    }

    /// The closed set of roles.
    pub fn list_roles(&self) -> Vec<RoleInfo> {
        UserRole::ALL
            .iter()
            .map(|role| RoleInfo {
                name: *role,
                description: role.description(),
            })
            .collect()
    }
}
