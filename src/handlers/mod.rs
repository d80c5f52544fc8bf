pub mod auth;
pub mod cards;
pub mod collections;
pub mod packs;
pub mod rarities;
