// POST /api/auth/register and POST /api/auth/login

use axum::http::StatusCode;
use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::services::auth_service;
use crate::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

/// Create an account. 201 on success, 409 when the username is taken.
pub async fn register(
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let pool = DatabaseManager::pool().await?;
    let user = auth_service::register(&pool, &request).await?;

    tracing::info!("Registered user: {}", user.username);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Registration successful: {}",
            user.username
        ))),
    ))
}

/// Exchange credentials for an access token. 401 on any credential
/// failure; the response never carries password or email.
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let response = auth_service::login(&pool, &request).await?;

    tracing::info!("User logged in: {}", response.username);
    Ok(Json(response))
}
