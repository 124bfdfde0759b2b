//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique account identifier (the token subject).
    pub id: i64,
    /// Unique login name, stored lowercase.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Phone number in E.164 format.
    pub phone: Option<String>,
    /// Peppered Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// Whether the account may use protected operations.
    pub account_enabled: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the account has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Normalized username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Self-service profile changes.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    /// New email address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

/// Administrative account changes. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct AdminUpdateUser {
    /// New role.
    pub role: Option<UserRole>,
    /// New email address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// Enable or disable the account.
    pub account_enabled: Option<bool>,
}
