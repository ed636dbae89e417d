use anyhow::Result;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::SupabaseClient;

use crate::models::{UpsertUserRequest, UserRecord, ADMIN_ROLE};

pub const USERS: &str = "users";

pub struct UserService {
    supabase: SupabaseClient,
}

impl UserService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Creates the user or merges `request` into the existing document.
    pub async fn upsert_user(&self, email: &str, request: UpsertUserRequest) -> Result<UserRecord> {
        debug!("Upserting user {}", email);

        let mut document = Map::new();
        document.insert("email".to_string(), json!(email));
        if let Some(name) = request.name {
            document.insert("name".to_string(), json!(name));
        }

        let user = self.supabase.upsert(USERS, Value::Object(document), "email").await?;
        info!("User {} stored", email);

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        debug!("Looking up user {}", email);
        self.supabase.select_one(USERS, &[("email", email)]).await
    }

    /// Unknown users are not admins.
    pub async fn is_admin(&self, email: &str) -> Result<bool> {
        Ok(self.find_by_email(email).await?
            .map(|user| user.is_admin())
            .unwrap_or(false))
    }

    /// Grants the admin role. Returns `None` when no such user exists.
    pub async fn make_admin(&self, email: &str) -> Result<Option<UserRecord>> {
        let updated: Vec<UserRecord> = self.supabase.update(
            USERS,
            &[("email", email)],
            json!({ "role": ADMIN_ROLE }),
        ).await?;

        if !updated.is_empty() {
            info!("User {} promoted to admin", email);
        }

        Ok(updated.into_iter().next())
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        debug!("Fetching all users");
        self.supabase.select(USERS, &[]).await
    }

    pub async fn remove_user(&self, id: &str) -> Result<usize> {
        let removed = self.supabase.delete(USERS, &[("id", id)]).await?;
        info!("Removed {} user document(s) with id {}", removed, id);
        Ok(removed)
    }
}
