pub mod auth_service;
pub mod card_service;
pub mod collection_service;
pub mod pack_service;
pub mod rarity_service;
