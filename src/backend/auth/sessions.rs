/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation. Tokens are HS256
 * JWTs carrying the user id plus issue and expiry timestamps. The signing
 * secret comes from `ServerConfig` and is required at startup.
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime of tokens issued by register and login
pub const SESSION_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Lifetime of password-reset tokens
pub const RESET_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub id: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Parse the user id claim
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.id)
    }
}

/// Signs and verifies tokens with a shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a token for `user_id` that expires after `ttl`
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp().max(0) as u64;

        let claims = Claims {
            id: user_id.to_string(),
            iat: now,
            exp: now + ttl.as_secs(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Create a 7-day session token
    pub fn issue_session(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(user_id, SESSION_TOKEN_TTL)
    }

    /// Create a 1-hour password-reset token
    pub fn issue_reset(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(user_id, RESET_TOKEN_TTL)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_round_trip() {
        let issuer = TokenIssuer::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = issuer.issue_session(user_id).unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.exp - claims.iat, SESSION_TOKEN_TTL.as_secs());
    }

    #[test]
    fn test_reset_token_expires_in_an_hour() {
        let issuer = TokenIssuer::new("test-secret");
        let token = issuer.issue_reset(Uuid::new_v4()).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let token = TokenIssuer::new("secret-a").issue_session(Uuid::new_v4()).unwrap();
        assert!(TokenIssuer::new("secret-b").verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let issuer = TokenIssuer::new("test-secret");
        let claims = Claims {
            id: Uuid::new_v4().to_string(),
            iat: 1_000,
            exp: 2_000,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn test_verify_invalid_token() {
        let issuer = TokenIssuer::new("test-secret");
        assert!(issuer.verify("invalid.token.here").is_err());
    }
}
