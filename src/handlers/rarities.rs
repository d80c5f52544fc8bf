// GET /api/rarities - full rarity listing

use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::services::rarity_service;
use crate::types::RarityDto;

pub async fn list() -> Result<Json<Vec<RarityDto>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let rarities = rarity_service::list(&pool).await?;
    Ok(Json(rarities))
}
