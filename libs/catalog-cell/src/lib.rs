//! # Catalog Cell
//!
//! Treatments offered by the clinic and their open slots for a given day.
//!
//! - `GET /services` - every service with its full slot list
//! - `GET /available?date=` - services with that day's booked slots removed

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::catalog_routes;
pub use services::{availability::compute_availability, CatalogService};
