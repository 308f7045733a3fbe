use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: usize,
}

/// Stateless bearer token service. Validity is purely signature + expiry;
/// there is no server-side session and no revocation before expiry.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    /// Sign a token binding `user_id` for the configured lifetime.
    pub fn issue(&self, user_id: Uuid) -> Result<String, ApiError> {
        let expiration = Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ApiError::Internal("Failed to calculate expiration".into()))?
            .timestamp() as usize;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Internal(format!("Token creation failed: {}", e)))
    }

    /// Resolve a token back to the user id it was issued for. Malformed,
    /// tampered and expired tokens all fail the same way.
    pub fn verify(&self, token: &str) -> Result<Uuid, ApiError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| ApiError::Unauthorized)?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| ApiError::Unauthorized)
    }
}
