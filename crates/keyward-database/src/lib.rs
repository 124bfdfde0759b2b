//! # keyward-database
//!
//! Account store abstraction plus PostgreSQL and in-memory implementations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryUserRepository, PgUserRepository, UserStore, connect_user_store};
