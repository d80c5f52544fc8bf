use sqlx::PgPool;

use crate::auth::{self, TokenError};
use crate::auth::password;
use crate::database::is_unique_violation;
use crate::database::models::User;
use crate::types::{LoginRequest, LoginResponse, RegisterRequest};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Covers both unknown username and wrong password; callers must not
    /// be able to tell which
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Create a new user. The password is hashed before insert; the unique
/// index on username is the authoritative guard against duplicates.
pub async fn register(pool: &PgPool, request: &RegisterRequest) -> Result<User, AuthError> {
    // Surrounding whitespace would otherwise mint a distinct account
    let username = request.username.trim();

    let existing = sqlx::query_scalar::<_, i64>("SELECT user_id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(AuthError::DuplicateUsername(username.to_string()));
    }

    let hashed = password::hash_password(&request.password)?;

    // Empty email is stored as unset
    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    let result = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password, email) VALUES ($1, $2, $3) \
         RETURNING user_id, username, password, email",
    )
    .bind(username)
    .bind(&hashed)
    .bind(email)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        // Concurrent registration racing the pre-check lands here
        Err(e) if is_unique_violation(&e) => {
            Err(AuthError::DuplicateUsername(username.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Verify credentials and issue a fresh access token
pub async fn login(pool: &PgPool, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT user_id, username, password, email FROM users WHERE username = $1",
    )
    .bind(&request.username)
    .fetch_optional(pool)
    .await?
    .ok_or(AuthError::InvalidCredentials)?;

    if !password::verify_password(&request.password, &user.password)? {
        return Err(AuthError::InvalidCredentials);
    }

    let access_token = auth::generate_token(&user.username)?;
    Ok(LoginResponse {
        username: user.username,
        access_token,
    })
}
