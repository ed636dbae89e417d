use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::extractor::{extract_user, FORBIDDEN_MESSAGE};

use crate::services::UserService;

/// Admin gate. Must sit inside `auth_middleware`, which supplies the `User`.
pub async fn admin_middleware(
    State(config): State<Arc<AppConfig>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = extract_user(&request)?;
    let email = user.email_or_subject();

    let is_admin = UserService::new(&config)
        .is_admin(email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    if !is_admin {
        debug!("{} is not an admin", email);
        return Err(AppError::Forbidden(FORBIDDEN_MESSAGE.to_string()));
    }

    Ok(next.run(request).await)
}
