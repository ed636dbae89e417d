use std::env;
use tracing::warn;

const DEFAULT_TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub access_token_secret: String,
    pub access_token_ttl_hours: i64,
    pub stripe_secret_key: String,
    pub stripe_base_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_service_key: env::var("SUPABASE_SERVICE_ROLE_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_SERVICE_ROLE_KEY not set, using empty value");
                    String::new()
                }),
            access_token_secret: env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or_else(|_| {
                    warn!("ACCESS_TOKEN_SECRET not set, using empty value");
                    String::new()
                }),
            access_token_ttl_hours: at_least_one(
                "ACCESS_TOKEN_TTL_HOURS",
                parse_or_default("ACCESS_TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS),
                DEFAULT_TOKEN_TTL_HOURS,
            ),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .unwrap_or_else(|_| {
                    warn!("STRIPE_SECRET_KEY not set, using empty value");
                    String::new()
                }),
            stripe_base_url: env::var("STRIPE_API_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("STRIPE_API_BASE_URL not set, using default");
                    "https://api.stripe.com/v1".to_string()
                }),
            port: parse_or_default("PORT", 5000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty()
            && !self.supabase_service_key.is_empty()
            && !self.access_token_secret.is_empty()
    }

    pub fn is_payment_configured(&self) -> bool {
        !self.stripe_secret_key.is_empty() && !self.stripe_base_url.is_empty()
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn at_least_one(key: &str, value: i64, default: i64) -> i64 {
    if value < 1 {
        warn!("{} must be at least 1, got {}, using default {}", key, value, default);
        return default;
    }
    value
}
