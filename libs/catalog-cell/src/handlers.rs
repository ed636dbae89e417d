use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AvailabilityQuery, Service};
use crate::services::CatalogService;

#[axum::debug_handler]
pub async fn list_services(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let catalog = CatalogService::new(&config);

    let services = catalog.list_services().await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(services))
}

#[axum::debug_handler]
pub async fn get_available(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    if query.date.trim().is_empty() {
        return Err(AppError::BadRequest("date is required".to_string()));
    }

    let catalog = CatalogService::new(&config);

    let services = catalog.available_on(&query.date).await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(services))
}
