//! # keyward-auth
//!
//! Authentication and authorization core for Keyward.
//!
//! ## Modules
//!
//! - `password`: peppered Argon2id credential hashing
//! - `jwt`: HS384 token issuance and validation
//! - `account`: the account-status lookup consulted by the chain
//! - `guard`: the ordered authorization chain in front of protected routes

pub mod account;
pub mod error;
pub mod guard;
pub mod jwt;
pub mod password;

pub use account::{AccountStatus, AccountStore, UserStoreAccounts};
pub use error::{AccessError, CredentialError, TokenError};
pub use guard::{Access, AuthorizationChain};
pub use jwt::{Claims, Identity, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
