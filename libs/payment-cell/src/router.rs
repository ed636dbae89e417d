use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn payment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/create-payment-intent", post(handlers::create_payment_intent))
        .with_state(state)
}
