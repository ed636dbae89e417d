use std::sync::Arc;

use axum::{extract::State, Json};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{to_minor_units, CreatePaymentIntentRequest, PaymentError, PaymentIntentResponse};
use crate::services::stripe::StripeClient;

#[axum::debug_handler]
pub async fn create_payment_intent(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let amount = to_minor_units(request.price)?;

    let stripe = StripeClient::new(&config)?;
    let intent = stripe.create_payment_intent(amount).await?;

    let client_secret = intent.client_secret.ok_or_else(|| PaymentError::StripeApiError {
        message: format!("Payment intent {} has no client secret", intent.id),
    })?;

    Ok(Json(PaymentIntentResponse {
        client_secret,
        payment_intent_id: intent.id,
        amount: intent.amount,
    }))
}
