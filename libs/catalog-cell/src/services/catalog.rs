use anyhow::Result;
use tracing::debug;

use booking_cell::models::Booking;
use booking_cell::services::booking::BOOKINGS;
use shared_config::AppConfig;
use shared_database::SupabaseClient;

use crate::models::Service;
use crate::services::availability::compute_availability;

pub const SERVICES: &str = "services";

pub struct CatalogService {
    supabase: SupabaseClient,
}

impl CatalogService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn list_services(&self) -> Result<Vec<Service>> {
        debug!("Fetching all services");
        self.supabase.select(SERVICES, &[]).await
    }

    /// Services for `date` with every slot already booked on that day removed.
    pub async fn available_on(&self, date: &str) -> Result<Vec<Service>> {
        debug!("Computing availability for {}", date);

        let services = self.list_services().await?;
        let bookings: Vec<Booking> = self.supabase.select(BOOKINGS, &[("date", date)]).await?;

        debug!("{} services, {} bookings on {}", services.len(), bookings.len(), date);
        Ok(compute_availability(services, &bookings))
    }
}
