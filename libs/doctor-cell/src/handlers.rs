use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{CreateDoctorRequest, Doctor};
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Json<Doctor>, AppError> {
    request.validate().map_err(AppError::ValidationError)?;

    let doctor = DoctorService::new(&state)
        .create_doctor(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Vec<Doctor>>, AppError> {
    let doctors = DoctorService::new(&state)
        .list_doctors()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(doctors))
}

#[axum::debug_handler]
pub async fn remove_doctor(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let removed = DoctorService::new(&state)
        .remove_doctor(&doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({ "deleted_count": removed })))
}
