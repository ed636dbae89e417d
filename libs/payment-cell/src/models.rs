use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

pub const DEFAULT_CURRENCY: &str = "usd";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
    pub amount: i64,
}

/// Subset of Stripe's PaymentIntent object the portal reads.
#[derive(Debug, Clone, Deserialize)]
pub struct StripePaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StripeErrorEnvelope {
    pub error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct StripeErrorBody {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment processing not configured")]
    NotConfigured,

    #[error("Invalid price: {0}")]
    InvalidAmount(String),

    #[error("Stripe API error: {message}")]
    StripeApiError { message: String },
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        PaymentError::StripeApiError {
            message: err.to_string(),
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::NotConfigured => AppError::ServiceUnavailable(err.to_string()),
            PaymentError::InvalidAmount(_) => AppError::ValidationError(err.to_string()),
            PaymentError::StripeApiError { .. } => AppError::ExternalService(err.to_string()),
        }
    }
}

/// Converts a price in major units to Stripe's integer minor units.
pub fn to_minor_units(price: f64) -> Result<i64, PaymentError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(PaymentError::InvalidAmount(price.to_string()));
    }

    let cents = (price * 100.0).round();
    if cents < 1.0 || cents > i64::MAX as f64 {
        return Err(PaymentError::InvalidAmount(price.to_string()));
    }

    Ok(cents as i64)
}
