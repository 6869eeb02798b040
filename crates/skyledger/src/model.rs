//! Core domain types for skyledger.
//!
//! This module defines the fundamental data structures of the reservation
//! ledger: flights, booking dates, and reservations.

use serde::{Deserialize, Serialize};

/// First year accepted for a booking date.
pub const MIN_BOOKING_YEAR: u32 = 2025;

/// Last year accepted for a booking date.
pub const MAX_BOOKING_YEAR: u32 = 2030;

/// A scheduled flight in the catalog.
///
/// Flights are reference data: seeded at startup, never persisted or modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight code, e.g. `FL123`.
    pub code: String,
    /// Destination city.
    pub destination: String,
    /// Scheduled departure time as `HH:MM`.
    pub departure: String,
}

impl Flight {
    /// Create a new flight from its catalog fields.
    #[must_use]
    pub fn new(code: &str, destination: &str, departure: &str) -> Self {
        Self {
            code: code.to_string(),
            destination: destination.to_string(),
            departure: departure.to_string(),
        }
    }
}

/// A calendar date attached to a booking.
///
/// There is no time-of-day and no timezone. Validity is bounded to the
/// booking window [`MIN_BOOKING_YEAR`]..=[`MAX_BOOKING_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookingDate {
    /// Day of month (1-based).
    pub day: u32,
    /// Month (1-based).
    pub month: u32,
    /// Four-digit year.
    pub year: u32,
}

impl BookingDate {
    /// Create a date from its parts. No validation is performed; call
    /// [`BookingDate::is_valid`] before trusting the result.
    #[must_use]
    pub fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day, month, year }
    }

    /// Parse a date of the exact form `DD/MM/YYYY`.
    ///
    /// Parsing never fails hard: malformed input degrades to an all-zero
    /// date, which then fails [`BookingDate::is_valid`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut parts = input.trim().splitn(3, '/');
        let day = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let month = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let year = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        Self { day, month, year }
    }

    /// Check whether this is a real calendar date within the booking window.
    ///
    /// February has 29 days iff the year is a leap year (divisible by 4,
    /// and not by 100 unless also by 400).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.year < MIN_BOOKING_YEAR || self.year > MAX_BOOKING_YEAR {
            return false;
        }
        if self.month < 1 || self.month > 12 {
            return false;
        }
        if self.day < 1 {
            return false;
        }
        self.day <= self.days_in_month()
    }

    /// Check whether this date falls in peak season (June, July, August,
    /// or December).
    #[must_use]
    pub fn is_peak_season(&self) -> bool {
        matches!(self.month, 6 | 7 | 8 | 12)
    }

    fn is_leap_year(&self) -> bool {
        self.year % 4 == 0 && (self.year % 100 != 0 || self.year % 400 == 0)
    }

    fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            _ => 0,
        }
    }
}

impl std::fmt::Display for BookingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// A live reservation in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Passenger name as entered.
    pub passenger: String,
    /// Code of the booked flight; always references a catalog entry.
    pub flight_code: String,
    /// Seat number, 1-based.
    pub seat: u32,
    /// Unique confirmation code, e.g. `PNR1000`. Never reused.
    pub confirmation: String,
    /// Ticket price in dollars. Always derived from the booking date's
    /// season classification, never set independently.
    pub price: f64,
    /// The booking date.
    pub booked_on: BookingDate,
}
