use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialty: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub img: Option<String>,
}

impl CreateDoctorRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.specialty.trim().is_empty() {
            return Err("specialty is required".to_string());
        }
        if !self.email.contains('@') {
            return Err(format!("Invalid email: {}", self.email));
        }
        Ok(())
    }
}
