use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rarity is keyed by its short code ("SR", "RR", ...), not a surrogate id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rarity {
    pub rarity_id: String,
    pub rarity_name: String,
    pub rarity_description: Option<String>,
}
