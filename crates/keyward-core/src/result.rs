//! Convenience result type alias for Keyward.

use crate::error::AppError;

/// A specialized `Result` type for Keyward operations.
pub type AppResult<T> = Result<T, AppError>;
