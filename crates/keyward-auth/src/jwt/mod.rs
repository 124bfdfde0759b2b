//! HS384 token issuance and validation.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, Identity};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;

/// The only signing algorithm issued or accepted.
pub const TOKEN_ALGORITHM: jsonwebtoken::Algorithm = jsonwebtoken::Algorithm::HS384;
