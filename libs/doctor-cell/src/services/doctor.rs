use anyhow::Result;
use serde_json::json;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::SupabaseClient;

use crate::models::{CreateDoctorRequest, Doctor};

pub const DOCTORS: &str = "doctors";

pub struct DoctorService {
    supabase: SupabaseClient,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Register a doctor
    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor> {
        debug!("Creating doctor profile for: {}", request.email);

        let doctor: Doctor = self.supabase.insert(
            DOCTORS,
            json!({
                "name": request.name,
                "email": request.email,
                "specialty": request.specialty,
                "img": request.img
            }),
        ).await?;

        info!("Doctor profile created with ID: {}", doctor.id);
        Ok(doctor)
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        debug!("Fetching all doctors");
        self.supabase.select(DOCTORS, &[]).await
    }

    pub async fn remove_doctor(&self, id: &str) -> Result<usize> {
        let removed = self.supabase.delete(DOCTORS, &[("id", id)]).await?;
        info!("Removed {} doctor document(s) with id {}", removed, id);
        Ok(removed)
    }
}
