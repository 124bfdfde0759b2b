//! Typed path parameter helpers.

use keyward_core::error::AppError;

/// Parses an account id from a path segment.
pub fn parse_user_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation(format!("Invalid user id: {s}")))
}
