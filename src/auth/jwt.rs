//! JWT Token Handler
//! Mission: Generate and validate JWT tokens securely

use crate::auth::models::{Claims, User};
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// JWT Handler for token operations
pub struct JwtHandler {
    secret: String,
    expiration_hours: i64,
}

impl JwtHandler {
    /// Create a new JWT handler with secret key
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            expiration_hours: 1, // 1-hour tokens
        }
    }

    /// Create a handler with a custom token lifetime.
    pub fn with_ttl_hours(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }

    /// Generate a JWT token for a user
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let expiration = Utc::now()
            .checked_add_signed(chrono::Duration::hours(self.expiration_hours))
            .context("Invalid timestamp")?
            .timestamp() as usize;

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            exp: expiration,
        };

        debug!(
            "Generating JWT for user {} ({}), expires in {}h",
            user.username, user.id, self.expiration_hours
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to generate JWT")
    }

    /// Validate a JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .context("Invalid or expired token")?;

        debug!("Validated JWT for user {}", decoded.claims.username);

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User {
            id: 1,
            username: "testuser".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());
        let user = create_test_user();

        let token = handler.generate_token(&user).unwrap();
        assert!(!token.is_empty());

        let claims = handler.validate_token(&token).unwrap();
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.sub, user.id);
        assert!(claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());

        let result = handler.validate_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_different_secrets_reject() {
        let handler1 = JwtHandler::new("secret1".to_string());
        let handler2 = JwtHandler::new("secret2".to_string());
        let user = create_test_user();

        let token = handler1.generate_token(&user).unwrap();

        let result = handler2.validate_token(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative TTL puts exp far enough in the past to clear the
        // default 60-second validation leeway.
        let handler = JwtHandler::with_ttl_hours("test-secret".to_string(), -2);
        let user = create_test_user();

        let token = handler.generate_token(&user).unwrap();
        assert!(handler.validate_token(&token).is_err());
    }
}
