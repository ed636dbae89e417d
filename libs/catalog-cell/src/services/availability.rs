use std::collections::HashSet;

use booking_cell::models::Booking;

use crate::models::Service;

/// Removes from each service the slots already booked for it.
///
/// `bookings` must already be narrowed to a single date. A booking only
/// consumes a slot of the service whose name equals its treatment; the
/// remaining slots keep their original order.
pub fn compute_availability(services: Vec<Service>, bookings: &[Booking]) -> Vec<Service> {
    services
        .into_iter()
        .map(|mut service| {
            let booked: HashSet<&str> = bookings
                .iter()
                .filter(|booking| booking.treatment == service.name)
                .map(|booking| booking.slot.as_str())
                .collect();

            service.slots.retain(|slot| !booked.contains(slot.as_str()));
            service
        })
        .collect()
}
