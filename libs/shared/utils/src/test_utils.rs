use std::sync::Arc;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use base64::{Engine as _, engine::general_purpose};
use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::User;

pub struct TestConfig {
    pub jwt_secret: String,
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub stripe_secret_key: String,
    pub stripe_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: "test-service-key".to_string(),
            stripe_secret_key: "sk_test_portal".to_string(),
            stripe_base_url: "http://localhost:12111/v1".to_string(),
        }
    }
}

impl TestConfig {
    /// Points both the document store and Stripe at a mock server.
    pub fn with_mock_server(uri: &str) -> Self {
        Self {
            supabase_url: uri.to_string(),
            stripe_base_url: format!("{}/v1", uri),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_service_key: self.supabase_service_key.clone(),
            access_token_secret: self.jwt_secret.clone(),
            access_token_ttl_hours: 1,
            stripe_secret_key: self.stripe_secret_key.clone(),
            stripe_base_url: self.stripe_base_url.clone(),
            port: 5000,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new("test@example.com", "patient")
    }
}

impl TestUser {
    pub fn new(email: &str, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    pub fn patient(email: &str) -> Self {
        Self::new(email, "patient")
    }

    pub fn admin(email: &str) -> Self {
        Self::new(email, "admin")
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.email.clone(),
            email: Some(self.email.clone()),
            role: Some(self.role.clone()),
            created_at: Some(Utc::now()),
        }
    }

    pub fn bearer(&self, secret: &str) -> String {
        format!("Bearer {}", JwtTestUtils::create_test_token(self, secret, Some(1)))
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(1));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": user.email,
            "email": user.email,
            "iat": now.timestamp(),
            "exp": exp.timestamp()
        });

        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(1))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}

/// Document fixtures shaped like the store's rows.
pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn service_response(name: &str, slots: &[&str]) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "name": name,
            "slots": slots,
            "price": 120.0
        })
    }

    pub fn booking_response(treatment: &str, date: &str, slot: &str, patient: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "treatment": treatment,
            "date": date,
            "slot": slot,
            "patient": patient,
            "patient_name": "Test Patient",
            "phone": null,
            "price": 120.0,
            "paid": false,
            "transaction_id": null,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn user_response(email: &str, role: Option<&str>) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "email": email,
            "name": "Test User",
            "role": role,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn doctor_response(name: &str, email: &str, specialty: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "name": name,
            "email": email,
            "specialty": specialty,
            "img": null,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "message": message,
            "code": code
        })
    }
}
