use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub treatment: String,
    pub date: String,
    pub slot: String,
    pub patient: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub treatment: String,
    pub date: String,
    pub slot: String,
    pub patient: String,
    pub patient_name: Option<String>,
    pub phone: Option<String>,
    pub price: Option<f64>,
}

impl CreateBookingRequest {
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("treatment", &self.treatment),
            ("date", &self.date),
            ("slot", &self.slot),
            ("patient", &self.patient),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} is required", field));
            }
        }

        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err("price must be a non-negative number".to_string());
            }
        }

        Ok(())
    }
}

/// Result of a booking attempt. A duplicate is reported, not rejected.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingOutcome {
    pub success: bool,
    pub booking: Booking,
}

#[derive(Debug, Deserialize)]
pub struct PatientQuery {
    pub patient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmPaymentRequest {
    pub transaction_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub transaction_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateBookingRequest {
        CreateBookingRequest {
            treatment: "Teeth Cleaning".to_string(),
            date: "May 16, 2022".to_string(),
            slot: "08.00 AM - 08.30 AM".to_string(),
            patient: "patient@example.com".to_string(),
            patient_name: None,
            phone: None,
            price: Some(120.0),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_blank_slot_is_rejected() {
        let mut req = request();
        req.slot = "  ".to_string();
        assert_eq!(req.validate().unwrap_err(), "slot is required");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut req = request();
        req.price = Some(-1.0);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_booking_defaults_unpaid() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": Uuid::new_v4(),
            "treatment": "Teeth Cleaning",
            "date": "May 16, 2022",
            "slot": "08.00 AM - 08.30 AM",
            "patient": "patient@example.com"
        }))
        .unwrap();

        assert!(!booking.paid);
        assert!(booking.transaction_id.is_none());
    }
}
