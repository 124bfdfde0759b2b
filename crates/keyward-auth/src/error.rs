//! Error taxonomy of the auth subsystem.
//!
//! Each enum converts into [`AppError`] so callers can keep using `?`.
//! Token sub-kinds are collapsed before they reach a caller.

use thiserror::Error;

use keyward_core::error::{AppError, ErrorKind};

/// Failures of the credential hasher.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Identity or secret was empty.
    #[error("identity and secret must not be empty")]
    InvalidInput,
    /// The stored hash could not be parsed.
    #[error("stored credential hash is corrupt: {0}")]
    CorruptHash(String),
    /// The hashing primitive itself failed.
    #[error("credential hashing failed: {0}")]
    Hashing(String),
}

/// Reasons a token is rejected or cannot be produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Wrong shape, undecodable segment or unusable claims.
    #[error("token is malformed")]
    Malformed,
    /// The header names an algorithm other than HS384.
    #[error("token algorithm is not accepted")]
    AlgorithmMismatch,
    /// The MAC does not match the header and claims.
    #[error("token signature is invalid")]
    BadSignature,
    /// The current time is past `exp`.
    #[error("token has expired")]
    Expired,
    /// Signing failed while issuing.
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Outcomes of the authorization chain and of login.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Missing, unreadable or invalid token, or an unknown account.
    #[error("authentication required")]
    Unauthenticated,
    /// The account exists but has been disabled.
    #[error("user account disabled")]
    AccountDisabled,
    /// The caller's role does not allow the operation.
    #[error("insufficient role")]
    InsufficientRole,
    /// Username or password did not match at login.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// The account store could not be queried.
    #[error("account store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::InvalidInput => AppError::validation("Username and password are required"),
            other => AppError::with_source(ErrorKind::Internal, "Credential processing failed", other),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(_) => {
                AppError::with_source(ErrorKind::Internal, "Token signing failed", err)
            }
            _ => AppError::authentication("Authentication required"),
        }
    }
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthenticated => AppError::authentication("Authentication required"),
            AccessError::AccountDisabled => AppError::account_disabled("User account disabled"),
            AccessError::InsufficientRole => AppError::authorization("Insufficient role"),
            AccessError::InvalidCredentials => {
                AppError::authentication("Invalid username or password")
            }
            AccessError::StoreUnavailable(_) => {
                AppError::with_source(ErrorKind::ServiceUnavailable, "Account store unavailable", err)
            }
        }
    }
}
