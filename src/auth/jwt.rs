//! JWT token encoding and decoding using HS256.
//!
//! The token identifies the calling user and lists the capabilities they
//! hold; it travels as an `Authorization: Bearer` header.

use anyhow::{Context, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// Capability required by every analysis route
pub const MANAGE_OPTIONS: &str = "manage_options";

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: numeric user id
    pub sub: String,
    /// User email
    pub email: String,
    /// User display name
    pub name: String,
    /// Capabilities granted to the user (e.g. `manage_options`)
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }
}

/// Identity written into a new token
#[derive(Debug, Clone)]
pub struct TokenSubject<'a> {
    pub user_id: u64,
    pub email: &'a str,
    pub name: &'a str,
    pub capabilities: &'a [String],
}

/// Encode a JWT token for the given user.
///
/// Uses HS256 signing with the provided secret.
pub fn encode_jwt(subject: &TokenSubject<'_>, secret: &str, expiry_secs: u64) -> Result<String> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: subject.user_id.to_string(),
        email: subject.email.to_string(),
        name: subject.name.to_string(),
        capabilities: subject.capabilities.to_vec(),
        iat: now,
        exp: now + expiry_secs as i64,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT")
}

/// Decode and validate a JWT token.
///
/// Returns the claims if the token is valid, not expired, and
/// signed with the correct secret.
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data: TokenData<Claims> = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT")?;

    Ok(token_data.claims)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-minimum-32-chars!!";

    fn admin_caps() -> Vec<String> {
        vec![MANAGE_OPTIONS.to_string()]
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let caps = admin_caps();
        let subject = TokenSubject {
            user_id: 1,
            email: "alice@semantix.test",
            name: "Alice",
            capabilities: &caps,
        };
        let token = encode_jwt(&subject, TEST_SECRET, 3600).expect("encode should succeed");

        let claims = decode_jwt(&token, TEST_SECRET).expect("decode should succeed");
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.email, "alice@semantix.test");
        assert_eq!(claims.name, "Alice");
        assert!(claims.can(MANAGE_OPTIONS));
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Manually craft a token with exp in the past
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "2".to_string(),
            email: "bob@semantix.test".to_string(),
            name: "Bob".to_string(),
            capabilities: admin_caps(),
            iat: now - 7200, // issued 2h ago
            exp: now - 3600, // expired 1h ago
        };

        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .expect("encode should succeed");

        let result = decode_jwt(&token, TEST_SECRET);
        assert!(result.is_err(), "expired token should be rejected");
    }

    #[test]
    fn test_invalid_secret_rejected() {
        let subject = TokenSubject {
            user_id: 3,
            email: "charlie@semantix.test",
            name: "Charlie",
            capabilities: &[],
        };
        let token = encode_jwt(&subject, TEST_SECRET, 3600).expect("encode should succeed");

        let result = decode_jwt(&token, "wrong-secret-that-is-also-32chars!");
        assert!(result.is_err(), "wrong secret should be rejected");
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(decode_jwt("not.a.valid.jwt", TEST_SECRET).is_err());
        assert!(decode_jwt("", TEST_SECRET).is_err());
    }

    #[test]
    fn test_missing_capabilities_default_to_none() {
        let json = r#"{"sub":"4","email":"e@x","name":"E","iat":0,"exp":0}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.capabilities.is_empty());
        assert!(!claims.can(MANAGE_OPTIONS));
    }
}
