use anyhow::Result;
use serde_json::json;
use tracing::{debug, error, info};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::SupabaseClient;

use crate::models::{Booking, BookingOutcome, ConfirmPaymentRequest, CreateBookingRequest, Payment};

pub const BOOKINGS: &str = "bookings";
pub const PAYMENTS: &str = "payments";

pub struct BookingService {
    supabase: SupabaseClient,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Existing booking for the same treatment, date and patient, if any.
    pub async fn find_duplicate(&self, request: &CreateBookingRequest) -> Result<Option<Booking>> {
        self.supabase.select_one(
            BOOKINGS,
            &[
                ("treatment", request.treatment.as_str()),
                ("date", request.date.as_str()),
                ("patient", request.patient.as_str()),
            ],
        ).await
    }

    pub async fn create_booking(&self, request: CreateBookingRequest) -> Result<BookingOutcome> {
        debug!("Booking {} on {} for {}", request.treatment, request.date, request.patient);

        if let Some(existing) = self.find_duplicate(&request).await? {
            info!("Duplicate booking {} for {}", existing.id, request.patient);
            return Ok(BookingOutcome {
                success: false,
                booking: existing,
            });
        }

        let document = json!({
            "treatment": request.treatment,
            "date": request.date,
            "slot": request.slot,
            "patient": request.patient,
            "patient_name": request.patient_name,
            "phone": request.phone,
            "price": request.price,
            "paid": false
        });

        let booking: Booking = self.supabase.insert(BOOKINGS, document).await?;
        info!("Booking {} created", booking.id);

        Ok(BookingOutcome {
            success: true,
            booking,
        })
    }

    pub async fn bookings_for_patient(&self, patient: &str) -> Result<Vec<Booking>> {
        debug!("Fetching bookings for {}", patient);
        self.supabase.select(BOOKINGS, &[("patient", patient)]).await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        debug!("Fetching all bookings");
        self.supabase.select(BOOKINGS, &[]).await
    }

    pub async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        debug!("Fetching booking {}", id);
        self.supabase.select_one(BOOKINGS, &[("id", id.to_string().as_str())]).await
    }

    /// Marks the booking paid and records the payment. Returns `None`, and
    /// writes nothing, when the booking does not exist.
    pub async fn confirm_payment(
        &self,
        id: Uuid,
        request: ConfirmPaymentRequest,
    ) -> Result<Option<Booking>> {
        let id_str = id.to_string();
        let updated: Vec<Booking> = self.supabase.update(
            BOOKINGS,
            &[("id", id_str.as_str())],
            json!({
                "paid": true,
                "transaction_id": request.transaction_id
            }),
        ).await?;

        let Some(booking) = updated.into_iter().next() else {
            return Ok(None);
        };

        let payment: Payment = self.supabase.insert(
            PAYMENTS,
            json!({
                "booking_id": id,
                "transaction_id": request.transaction_id,
                "amount": request.amount.or(booking.price)
            }),
        ).await.map_err(|e| {
            error!(
                "Booking {} marked paid with transaction {} but its payment record failed: {}",
                id, request.transaction_id, e
            );
            e
        })?;

        info!("Payment {} recorded for booking {}", payment.id, id);
        Ok(Some(booking))
    }
}
