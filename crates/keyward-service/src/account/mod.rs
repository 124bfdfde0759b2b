//! Self-service and administrative account operations.

pub mod admin;
pub mod service;

pub use admin::{AdminUserService, RoleInfo};
pub use service::{AccountService, LoginResult};
