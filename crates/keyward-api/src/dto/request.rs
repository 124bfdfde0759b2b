//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use keyward_entity::user::{AdminUpdateUser, UpdateProfile, UserRole};

/// Accepts `+` followed by 2 to 15 digits, the first non-zero.
pub fn validate_e164(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or_default();
    let valid = (2..=15).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.starts_with('0');
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("e164").with_message("Phone number must be in E.164 format".into()))
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, max = 16, message = "Username must be 1-16 characters"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, max = 32, message = "Password must be 1-32 characters"))]
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 1, max = 16, message = "Username must be 1-16 characters"))]
    pub username: String,
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, max = 32, message = "Password must be 1-32 characters"))]
    pub password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Phone in E.164 format.
    #[validate(custom(function = "validate_e164"))]
    pub phone: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfile {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// New password.
    #[validate(length(min = 1, max = 32, message = "Password must be 1-32 characters"))]
    pub password: String,
}

/// Update user request (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AdminUpdateUserRequest {
    /// New role.
    pub role: Option<UserRole>,
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Phone in E.164 format.
    #[validate(custom(function = "validate_e164"))]
    pub phone: Option<String>,
    /// Enable or disable the account.
    pub account_enabled: Option<bool>,
}

impl From<AdminUpdateUserRequest> for AdminUpdateUser {
    fn from(req: AdminUpdateUserRequest) -> Self {
        Self {
            role: req.role,
            email: req.email,
            phone: req.phone,
            account_enabled: req.account_enabled,
        }
    }
}
