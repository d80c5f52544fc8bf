use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Immutable catalog data, seeded externally
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub card_id: i64,
    pub card_name: String,
    pub card_image_url: Option<String>,
    pub card_number_in_pack: Option<String>,
    pub card_type: Option<String>,
    pub card_attribute: Option<String>,
    pub pack_id: Option<i64>,
    pub rarity_id: Option<String>,
}

/// Card row joined with its pack and rarity lookups (eager-loaded fetch)
#[derive(Debug, Clone, FromRow)]
pub struct CardWithDetails {
    pub card_id: i64,
    pub card_name: String,
    pub card_image_url: Option<String>,
    pub card_number_in_pack: Option<String>,
    pub card_type: Option<String>,
    pub card_attribute: Option<String>,
    pub pack_name: Option<String>,
    pub rarity_id: Option<String>,
    pub rarity_name: Option<String>,
}
