//! Password hashing over bcrypt. Plaintext is hashed before it ever
//! reaches the database and is never persisted.

use crate::config;

/// Hash a password with the configured work factor
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, config::config().security.bcrypt_cost)
}

/// Verify a candidate password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}
