pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;

/// Claims embedded in every access token. The subject is the username;
/// expiration is fixed at issuance (config, 24h) and is the sole
/// invalidation path - there is no refresh or revocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours as i64)).timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token generation error: {0}")]
    Generation(String),

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("JWT secret not configured")]
    MissingSecret,
}

fn encoding_key() -> Result<EncodingKey, TokenError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }
    Ok(EncodingKey::from_secret(secret.as_bytes()))
}

fn decoding_key() -> Result<DecodingKey, TokenError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }
    Ok(DecodingKey::from_secret(secret.as_bytes()))
}

fn validation() -> Validation {
    let mut validation = Validation::default();
    // Expiration is exact: a token is invalid at its exp instant
    validation.leeway = 0;
    validation
}

/// Issue a signed token with the username as subject
pub fn generate_token(username: &str) -> Result<String, TokenError> {
    let claims = Claims::new(username);
    encode(&Header::default(), &claims, &encoding_key()?)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Decode and signature-verify a token, returning its subject.
/// Malformed, tampered, or expired tokens all fail here.
pub fn extract_username(token: &str) -> Result<String, TokenError> {
    let data = decode::<Claims>(token, &decoding_key()?, &validation())
        .map_err(|e| TokenError::Invalid(e.to_string()))?;
    Ok(data.claims.sub)
}

/// Full validation against an expected username: signature, expiry,
/// and subject equality must all hold
pub fn validate_token(token: &str, expected_username: &str) -> bool {
    match extract_username(token) {
        Ok(subject) => subject == expected_username,
        Err(_) => false,
    }
}
