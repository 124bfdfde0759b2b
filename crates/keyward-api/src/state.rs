//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use keyward_auth::{AuthorizationChain, JwtDecoder, JwtEncoder, PasswordHasher, UserStoreAccounts};
use keyward_core::config::AppConfig;
use keyward_core::result::AppResult;
use keyward_database::UserStore;
use keyward_service::{AccountService, AdminUserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Account store
    pub users: Arc<dyn UserStore>,
    /// Password hasher (Argon2id)
    pub password_hasher: Arc<PasswordHasher>,
    /// Gate run in front of every protected route
    pub auth_chain: Arc<AuthorizationChain>,
    /// Self-service account operations
    pub account_service: Arc<AccountService>,
    /// Admin account operations
    pub admin_service: Arc<AdminUserService>,
}

impl AppState {
    /// Wire the auth components and services over `users`.
    ///
    /// Signing key and pepper are taken from `config.auth` here and never
    /// re-read.
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>) -> AppResult<Self> {
        let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let accounts = Arc::new(UserStoreAccounts::new(Arc::clone(&users)));
        let auth_chain = Arc::new(AuthorizationChain::new(JwtDecoder::new(&config.auth), accounts));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&users),
            Arc::clone(&password_hasher),
            jwt_encoder,
        ));
        let admin_service = Arc::new(AdminUserService::new(Arc::clone(&users)));

        Ok(Self {
            config: Arc::new(config),
            users,
            password_hasher,
            auth_chain,
            account_service,
            admin_service,
        })
    }
}
