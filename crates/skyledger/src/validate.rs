//! Pure validation predicates.
//!
//! Booking input is validated in a fixed order: flight code membership
//! (see [`crate::catalog::FlightCatalog::contains`]), seat range, seat
//! availability (see [`crate::store::ReservationStore::is_seat_available`]),
//! then date validity (see [`crate::model::BookingDate::is_valid`]). The
//! first failure aborts the workflow.

/// Check that a seat number lies in `1..=max_seats`.
#[must_use]
pub fn seat_in_range(seat: u32, max_seats: u32) -> bool {
    seat >= 1 && seat <= max_seats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_in_range_bounds() {
        assert!(!seat_in_range(0, 150));
        assert!(seat_in_range(1, 150));
        assert!(seat_in_range(150, 150));
        assert!(!seat_in_range(151, 150));
    }

    #[test]
    fn test_seat_in_range_respects_custom_max() {
        assert!(seat_in_range(10, 10));
        assert!(!seat_in_range(11, 10));
    }
}
