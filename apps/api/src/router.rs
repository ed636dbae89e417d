use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use booking_cell::router::booking_routes;
use catalog_cell::router::catalog_routes;
use doctor_cell::router::doctor_routes;
use payment_cell::router::payment_routes;
use shared_config::AppConfig;
use user_cell::router::user_routes;

/// Every cell mounts at the root; their paths do not overlap.
pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Doctors Portal Server Running" }))
        .merge(catalog_routes(state.clone()))
        .merge(booking_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(doctor_routes(state.clone()))
        .merge(payment_routes(state))
}
