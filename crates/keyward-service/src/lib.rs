//! # keyward-service
//!
//! Account use cases. Services receive their collaborators through `Arc`s
//! at construction and return [`AppError`](keyward_core::AppError) on
//! failure. Credential hashing always runs on the blocking thread pool.

pub mod account;
pub mod credentials;
pub mod seed;

pub use account::{AccountService, AdminUserService, LoginResult, RoleInfo};
pub use seed::seed_admin;
