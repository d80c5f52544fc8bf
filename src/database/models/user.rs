use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    /// Bcrypt hash, never the plaintext
    pub password: String,
    pub email: Option<String>,
}
