use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;
use shared_utils::extractor::FORBIDDEN_MESSAGE;

use crate::models::{Booking, BookingOutcome, ConfirmPaymentRequest, CreateBookingRequest, PatientQuery};
use crate::services::BookingService;

/// Books a slot for the caller. Booking on behalf of another patient is refused.
#[axum::debug_handler]
pub async fn create_booking(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<BookingOutcome>, AppError> {
    request.validate().map_err(AppError::ValidationError)?;
    debug!("Booking requested by {}", user.id);

    if user.email_or_subject() != request.patient {
        return Err(AppError::Forbidden(FORBIDDEN_MESSAGE.to_string()));
    }

    let outcome = BookingService::new(&config)
        .create_booking(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(outcome))
}

/// A patient may only list their own bookings.
#[axum::debug_handler]
pub async fn get_patient_bookings(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    Query(query): Query<PatientQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    if user.email_or_subject() != query.patient {
        return Err(AppError::Forbidden(FORBIDDEN_MESSAGE.to_string()));
    }

    let bookings = BookingService::new(&config)
        .bookings_for_patient(&query.patient)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(bookings))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = BookingService::new(&config)
        .list_bookings()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(bookings))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(config): State<Arc<AppConfig>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = BookingService::new(&config)
        .get_booking(id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

    Ok(Json(booking))
}

#[axum::debug_handler]
pub async fn confirm_payment(
    State(config): State<Arc<AppConfig>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ConfirmPaymentRequest>,
) -> Result<Json<Booking>, AppError> {
    if request.transaction_id.trim().is_empty() {
        return Err(AppError::ValidationError("transaction_id is required".to_string()));
    }

    let booking = BookingService::new(&config)
        .confirm_payment(id, request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

    Ok(Json(booking))
}
