//! Request and response transfer objects. Wire format is camelCase;
//! credential fields never appear on responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::models::{CardWithDetails, CollectionCategory, Pack, Rarity};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carries the username and token only
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub username: String,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// (category name, theme color) pair shown as a collection badge on
/// catalog cards the caller has already collected
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    pub category_name: String,
    pub theme_color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub card_id: i64,
    pub card_name: String,
    pub card_image_url: Option<String>,
    pub card_number_in_pack: Option<String>,
    pub card_type: Option<String>,
    pub card_attribute: Option<String>,
    pub pack_name: Option<String>,
    pub rarity_id: Option<String>,
    pub rarity_name: Option<String>,
    /// Empty for anonymous callers
    pub collections: Vec<CollectionInfo>,
}

impl CardDto {
    pub fn from_details(card: CardWithDetails, collections: Vec<CollectionInfo>) -> Self {
        Self {
            card_id: card.card_id,
            card_name: card.card_name,
            card_image_url: card.card_image_url,
            card_number_in_pack: card.card_number_in_pack,
            card_type: card.card_type,
            card_attribute: card.card_attribute,
            pack_name: card.pack_name,
            rarity_id: card.rarity_id,
            rarity_name: card.rarity_name,
            collections,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackDto {
    pub pack_id: i64,
    pub pack_name: String,
    pub release_date: Option<NaiveDate>,
    pub pack_image_url: Option<String>,
    pub series: Option<String>,
}

impl From<Pack> for PackDto {
    fn from(pack: Pack) -> Self {
        Self {
            pack_id: pack.pack_id,
            pack_name: pack.pack_name,
            release_date: pack.release_date,
            pack_image_url: pack.pack_image_url,
            series: pack.series,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RarityDto {
    pub rarity_id: String,
    pub rarity_name: String,
    pub rarity_description: Option<String>,
}

impl From<Rarity> for RarityDto {
    fn from(rarity: Rarity) -> Self {
        Self {
            rarity_id: rarity.rarity_id,
            rarity_name: rarity.rarity_name,
            rarity_description: rarity.rarity_description,
        }
    }
}

/// Create and update requests share one shape; theme color defaults to
/// "#FFFFFF" when absent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub category_name: String,
    pub theme_color: Option<String>,
    pub category_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub category_id: i64,
    pub category_name: String,
    pub theme_color: String,
    pub category_type: String,
}

impl From<CollectionCategory> for CategoryDto {
    fn from(category: CollectionCategory) -> Self {
        Self {
            category_id: category.category_id,
            category_name: category.category_name,
            theme_color: category.theme_color,
            category_type: category.category_type,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetailDto {
    pub category_id: i64,
    pub category_name: String,
    pub theme_color: String,
    pub category_type: String,
    pub collected_cards: Vec<CardDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectCardRequest {
    pub card_id: i64,
}
