//! # keyward-api
//!
//! HTTP API layer for Keyward built on Axum.
//!
//! Public routes (login, registration, health) sit beside two gated groups:
//! account routes behind the account gate and admin routes behind the admin
//! gate. Both gates run [`keyward_auth::AuthorizationChain`].

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
