use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Join row marking that a card has been placed into a category.
/// The (category_id, card_id) pair is unique at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CollectedCard {
    pub collected_card_id: i64,
    pub category_id: i64,
    pub card_id: i64,
}

/// Collected card joined with the owning category, used to annotate
/// catalog search results for an authenticated user
#[derive(Debug, Clone, FromRow)]
pub struct CollectedCardWithCategory {
    pub card_id: i64,
    pub category_name: String,
    pub theme_color: String,
}
