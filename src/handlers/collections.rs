// /api/my-collections - per-user collection category management.
// All routes require an authenticated identity; ownership itself is
// enforced inside the collection service, never trusted from the client.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::services::collection_service;
use crate::types::{
    CategoryDetailDto, CategoryDto, CategoryRequest, CollectCardRequest, MessageResponse,
};

/// GET /api/my-collections
pub async fn list_categories(
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let categories = collection_service::categories_for_user(&pool, &user.username).await?;
    Ok(Json(categories))
}

/// POST /api/my-collections
pub async fn create_category(
    CurrentUser(user): CurrentUser,
    Json(request): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryDto>), ApiError> {
    let pool = DatabaseManager::pool().await?;
    let category = collection_service::create_category(&pool, &user.username, &request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/my-collections/{id} - detail with collected cards expanded
pub async fn category_detail(
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<i64>,
) -> Result<Json<CategoryDetailDto>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let detail = collection_service::category_detail(&pool, category_id, &user.username).await?;
    Ok(Json(detail))
}

/// PUT /api/my-collections/{id}
pub async fn update_category(
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<i64>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<CategoryDto>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let category =
        collection_service::update_category(&pool, category_id, &user.username, &request).await?;
    Ok(Json(category))
}

/// DELETE /api/my-collections/{id} - cascades to collected cards
pub async fn delete_category(
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    collection_service::delete_category(&pool, category_id, &user.username).await?;
    Ok(Json(MessageResponse::new("Category deleted")))
}

/// POST /api/my-collections/{id}/cards
pub async fn add_card(
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<i64>,
    Json(request): Json<CollectCardRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let pool = DatabaseManager::pool().await?;
    collection_service::add_card(&pool, category_id, request.card_id, &user.username).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Card collected")),
    ))
}

/// DELETE /api/my-collections/{id}/cards/{cardId}
pub async fn remove_card(
    CurrentUser(user): CurrentUser,
    Path((category_id, card_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    collection_service::remove_card(&pool, category_id, card_id, &user.username).await?;
    Ok(Json(MessageResponse::new("Card removed from collection")))
}
