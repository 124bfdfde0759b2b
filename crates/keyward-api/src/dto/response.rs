//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keyward_entity::user::{User, UserRole};
use keyward_service::{LoginResult, RoleInfo};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Phone.
    pub phone: Option<String>,
    /// Role.
    pub role: UserRole,
    /// Whether the account is enabled.
    pub account_enabled: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone: user.phone,
            role: user.role,
            account_enabled: user.account_enabled,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Login and registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    pub token: String,
    /// The authenticated account.
    pub user: UserResponse,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            user: result.user.into(),
        }
    }
}

/// A role and what it grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    /// Role name.
    pub role: UserRole,
    /// Description.
    pub description: String,
}

impl From<RoleInfo> for RoleResponse {
    fn from(info: RoleInfo) -> Self {
        Self {
            role: info.name,
            description: info.description.to_string(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Account store reachability.
    pub store: String,
}
