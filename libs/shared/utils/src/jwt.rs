use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use jsonwebtoken::errors::ErrorKind;
use tracing::debug;

use shared_models::auth::{JwtClaims, TokenResponse, User};

/// Signs an HS256 access token for `email`, valid for `ttl_hours`.
pub fn issue_token(email: &str, jwt_secret: &str, ttl_hours: i64) -> Result<TokenResponse, String> {
    if jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    if ttl_hours < 1 {
        return Err(format!("Token lifetime must be at least 1 hour, got {}", ttl_hours));
    }

    let now = Utc::now();
    let expires_at = Duration::try_hours(ttl_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| format!("Token lifetime of {} hours is out of range", ttl_hours))?;

    let claims = JwtClaims {
        sub: email.to_string(),
        exp: Some(expires_at.timestamp() as u64),
        email: Some(email.to_string()),
        role: None,
        iat: Some(now.timestamp() as u64),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to sign token: {}", e))?;

    debug!("Issued token for {} expiring at {}", email, expires_at);

    Ok(TokenResponse {
        token,
        expires_at: expires_at.timestamp(),
    })
}

pub fn validate_token(token: &str, jwt_secret: &str) -> Result<User, String> {
    if jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        debug!("Token rejected: {}", e);
        match e.kind() {
            ErrorKind::ExpiredSignature => "Token expired".to_string(),
            ErrorKind::InvalidSignature => "Invalid token signature".to_string(),
            _ => "Invalid token format".to_string(),
        }
    })?;

    let claims = data.claims;
    let created_at = claims.iat
        .and_then(|timestamp| Utc.timestamp_opt(timestamp as i64, 0).single());

    let user = User {
        email: claims.email.or_else(|| Some(claims.sub.clone())),
        id: claims.sub,
        role: claims.role,
        created_at,
    };

    debug!("Token validated successfully for user: {}", user.id);
    Ok(user)
}
