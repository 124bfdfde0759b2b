//! Token payload and the identity extracted from it.

use serde::{Deserialize, Serialize};

use keyward_entity::user::UserRole;

/// JWT claims payload.
///
/// `user_id` travels as a decimal string. `iat` is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject account id.
    pub user_id: String,
    /// Role at issuance.
    pub role: UserRole,
    /// Issued-at (seconds since epoch).
    #[serde(default)]
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Claims for `subject_id` valid for `ttl_seconds` starting at `now`.
    pub fn new(subject_id: i64, role: UserRole, now: i64, ttl_seconds: i64) -> Self {
        Self {
            user_id: subject_id.to_string(),
            role,
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Whether the token is past its expiry at `now`. Valid at exactly `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }
}

/// The authenticated caller of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// Account id taken from the token.
    pub subject_id: i64,
    /// Role taken from the token.
    pub role: UserRole,
}

impl Identity {
    /// Whether the token grants admin access.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let claims = Claims::new(42, UserRole::Default, 1_700_000_000, 86_400);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["user_id"], "42");
        assert_eq!(json["role"], "default");
        assert_eq!(json["iat"], 1_700_000_000);
        assert_eq!(json["exp"], 1_700_086_400);
    }

    #[test]
    fn test_iat_optional_when_reading() {
        let claims: Claims =
            serde_json::from_str(r#"{"user_id":"7","role":"admin","exp":5000}"#).unwrap();
        assert_eq!(claims.user_id, "7");
        assert_eq!(claims.iat, 0);
        assert_eq!(claims.exp, 5000);
        assert!(serde_json::from_str::<Claims>(r#"{"user_id":"7","role":"admin"}"#).is_err());
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims::new(1, UserRole::Admin, 100, 10);
        assert!(!claims.is_expired_at(110));
        assert!(claims.is_expired_at(111));
    }
}
