//! # Payment Cell
//!
//! Card payments through Stripe. The client creates a PaymentIntent here,
//! confirms it with Stripe.js using the returned client secret, and then
//! reports the transaction id on `PATCH /booking/{id}`.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::payment_routes;
pub use services::stripe::StripeClient;
