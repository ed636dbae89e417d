use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::jwt::issue_token;

use crate::models::{AdminStatus, UpsertUserRequest, UserRecord, UserTokenResponse};
use crate::services::UserService;

fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(AppError::ValidationError(format!("Invalid email: {}", email)));
    }
    Ok(())
}

/// Stores the user and hands back a fresh access token for it.
#[axum::debug_handler]
pub async fn upsert_user(
    State(config): State<Arc<AppConfig>>,
    Path(email): Path<String>,
    Json(request): Json<UpsertUserRequest>,
) -> Result<Json<UserTokenResponse>, AppError> {
    validate_email(&email)?;

    let user = UserService::new(&config)
        .upsert_user(&email, request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let issued = issue_token(&email, &config.access_token_secret, config.access_token_ttl_hours)
        .map_err(AppError::Internal)?;

    Ok(Json(UserTokenResponse {
        user,
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}

#[axum::debug_handler]
pub async fn check_admin(
    State(config): State<Arc<AppConfig>>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>, AppError> {
    let admin = UserService::new(&config)
        .is_admin(&email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(AdminStatus { admin }))
}

#[axum::debug_handler]
pub async fn make_admin(
    State(config): State<Arc<AppConfig>>,
    Path(email): Path<String>,
) -> Result<Json<UserRecord>, AppError> {
    let user = UserService::new(&config)
        .make_admin(&email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", email)))?;

    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn list_users(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Vec<UserRecord>>, AppError> {
    let users = UserService::new(&config)
        .list_users()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn remove_user(
    State(config): State<Arc<AppConfig>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let removed = UserService::new(&config)
        .remove_user(&id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({ "deleted_count": removed })))
}
