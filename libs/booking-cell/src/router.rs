use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
    middleware,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;
use user_cell::admin_middleware;

use crate::handlers;

pub fn booking_routes(state: Arc<AppConfig>) -> Router {
    let public_routes = Router::new()
        .route("/booking/{id}", patch(handlers::confirm_payment));

    let protected_routes = Router::new()
        .route("/booking", get(handlers::get_patient_bookings).post(handlers::create_booking))
        .route("/booking/{id}", get(handlers::get_booking))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route("/bookings", get(handlers::list_bookings))
        .layer(middleware::from_fn_with_state(state.clone(), admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .with_state(state)
}
