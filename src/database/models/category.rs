use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User-owned collection bucket ("OWNED" or "WISHLIST")
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CollectionCategory {
    pub category_id: i64,
    pub category_name: String,
    pub theme_color: String,
    pub category_type: String,
    pub user_id: i64,
}

/// Category row joined with its owner's username, for ownership checks
#[derive(Debug, Clone, FromRow)]
pub struct CategoryWithOwner {
    pub category_id: i64,
    pub category_name: String,
    pub theme_color: String,
    pub category_type: String,
    pub user_id: i64,
    pub owner_username: String,
}
