//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to accounts.
///
/// Serialized as the lowercase name both on the wire (inside token claims)
/// and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Role assigned to every new account.
    Default,
    /// Administrator with access to account management.
    Admin,
}

impl UserRole {
    /// Every role, in display order.
    pub const ALL: [UserRole; 2] = [UserRole::Default, UserRole::Admin];

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Admin => "admin",
        }
    }

    /// Human-readable description of the role.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "The default role for all new accounts",
            Self::Admin => "Administrator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = keyward_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "admin" => Ok(Self::Admin),
            _ => Err(keyward_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: default, admin"
            ))),
        }
    }
}
