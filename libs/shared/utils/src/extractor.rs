use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
    body::Body,
};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::debug;

use shared_models::auth::User;
use shared_models::error::AppError;
use shared_config::AppConfig;

use crate::jwt::validate_token;

pub const UNAUTHORIZED_MESSAGE: &str = "UnAuthorized access";
pub const FORBIDDEN_MESSAGE: &str = "Forbidden access";

/// Rejects requests without a header with 401 and requests with a bad or
/// expired token with 403. Valid callers get a `User` extension.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !request.headers().contains_key(AUTHORIZATION) {
        return Err(AppError::Auth(UNAUTHORIZED_MESSAGE.to_string()));
    }

    let bearer = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| AppError::Forbidden(FORBIDDEN_MESSAGE.to_string()))?;

    let user = validate_token(bearer.token(), &config.access_token_secret)
        .map_err(|e| {
            debug!("Rejecting token: {}", e);
            AppError::Forbidden(FORBIDDEN_MESSAGE.to_string())
        })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

pub fn extract_user<B>(request: &Request<B>) -> Result<User, AppError> {
    request
        .extensions()
        .get::<User>()
        .cloned()
        .ok_or_else(|| AppError::Auth("User not found in request extensions".to_string()))
}
