// GET /api/cards - public catalog search with optional filters

use axum::extract::Query;
use axum::Json;

use crate::catalog::CardFilters;
use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::MaybeUser;
use crate::services::card_service;
use crate::types::CardDto;

/// Filterable catalog listing. Anonymous callers get the plain catalog;
/// authenticated callers additionally see which of their categories
/// already hold each card.
pub async fn search(
    MaybeUser(user): MaybeUser,
    Query(filters): Query<CardFilters>,
) -> Result<Json<Vec<CardDto>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let username = user.as_ref().map(|u| u.username.as_str());
    let cards = card_service::search(&pool, username, &filters).await?;
    Ok(Json(cards))
}
