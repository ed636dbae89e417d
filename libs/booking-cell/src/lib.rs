//! # Booking Cell
//!
//! Patient reservations of a treatment slot on a date, and their payment
//! confirmation.
//!
//! ## API Endpoints
//!
//! - `POST /booking` - book a slot (auth); duplicates answer `success: false`
//! - `GET /booking?patient=` - a patient's own bookings (auth, same patient)
//! - `GET /bookings` - every booking (auth + admin)
//! - `GET /booking/{id}` - one booking (auth)
//! - `PATCH /booking/{id}` - mark paid and record the payment

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::booking_routes;
pub use services::BookingService;
