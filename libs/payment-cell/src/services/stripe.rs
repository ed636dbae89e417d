use reqwest::Client;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{PaymentError, StripeErrorEnvelope, StripePaymentIntent, DEFAULT_CURRENCY};

/// Stripe REST client for PaymentIntents.
/// Based on: https://docs.stripe.com/api/payment_intents
pub struct StripeClient {
    client: Client,
    secret_key: String,
    base_url: String,
}

impl StripeClient {
    pub fn new(config: &AppConfig) -> Result<Self, PaymentError> {
        if !config.is_payment_configured() {
            return Err(PaymentError::NotConfigured);
        }

        Ok(Self {
            client: Client::new(),
            secret_key: config.stripe_secret_key.clone(),
            base_url: config.stripe_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a card PaymentIntent for `amount` minor units
    /// POST /v1/payment_intents
    pub async fn create_payment_intent(&self, amount: i64) -> Result<StripePaymentIntent, PaymentError> {
        info!("Creating Stripe payment intent for {} {}", amount, DEFAULT_CURRENCY);

        let url = format!("{}/payment_intents", self.base_url);
        let amount_field = amount.to_string();
        let form = [
            ("amount", amount_field.as_str()),
            ("currency", DEFAULT_CURRENCY),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        debug!("Stripe payment intent response: {}", status);

        if !status.is_success() {
            let message = serde_json::from_str::<StripeErrorEnvelope>(&response_text)
                .ok()
                .and_then(|envelope| envelope.error.message.or(envelope.error.error_type))
                .unwrap_or(response_text);

            error!("Stripe payment intent failed: {} - {}", status, message);
            return Err(PaymentError::StripeApiError {
                message: format!("HTTP {}: {}", status, message),
            });
        }

        let intent: StripePaymentIntent = serde_json::from_str(&response_text)
            .map_err(|e| PaymentError::StripeApiError {
                message: format!("Failed to parse payment intent: {}", e),
            })?;

        info!("Created Stripe payment intent: {}", intent.id);
        Ok(intent)
    }
}
