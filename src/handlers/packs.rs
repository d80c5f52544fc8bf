// GET /api/packs - full pack listing

use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::services::pack_service;
use crate::types::PackDto;

pub async fn list() -> Result<Json<Vec<PackDto>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let packs = pack_service::list(&pool).await?;
    Ok(Json(packs))
}
