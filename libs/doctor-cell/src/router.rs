use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, delete},
    middleware,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;
use user_cell::admin_middleware;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    let public_routes = Router::new()
        .route("/doctor-remove/{doctor_id}", delete(handlers::remove_doctor));

    // Doctor management is admin-only
    let admin_routes = Router::new()
        .route("/doctor", post(handlers::create_doctor))
        .route("/doctors", get(handlers::list_doctors))
        .layer(middleware::from_fn_with_state(state.clone(), admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state)
}
