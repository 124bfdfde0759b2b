//! HTTP integration tests driving the Axum router in-process.

mod admin_test;
mod auth_test;
mod helpers;
mod user_test;
