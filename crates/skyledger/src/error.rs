//! Error types for skyledger.
//!
//! This module defines all error types used throughout the skyledger crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for skyledger operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// The flight code does not match any catalog entry.
    #[error("invalid flight code '{code}': not in the flight catalog")]
    InvalidFlightCode {
        /// The rejected flight code.
        code: String,
    },

    /// The seat number is outside the cabin range.
    #[error("seat {seat} is out of range (valid seats are 1 to {max})")]
    SeatOutOfRange {
        /// The rejected seat number.
        seat: u32,
        /// The highest valid seat number.
        max: u32,
    },

    /// The seat is already held by another reservation on the same flight.
    #[error("seat {seat} is already booked on flight {flight}")]
    SeatUnavailable {
        /// The flight code.
        flight: String,
        /// The contested seat number.
        seat: u32,
    },

    /// The booking date failed validation.
    #[error("invalid booking date '{input}'")]
    InvalidDate {
        /// The raw date input as entered.
        input: String,
    },

    // === Store Errors ===
    /// No live reservation carries the given confirmation code.
    #[error("no reservation found for confirmation code '{code}'")]
    ReservationNotFound {
        /// The confirmation code that was looked up.
        code: String,
    },

    /// The store has reached its capacity bound.
    #[error("reservation store is full ({capacity} reservations)")]
    StoreFull {
        /// The configured capacity.
        capacity: usize,
    },

    // === Persistence Errors ===
    /// Failed to open or create the reservation data file.
    #[error("failed to open data file at {path}: {source}")]
    DataFileOpen {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for skyledger operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid flight code error.
    #[must_use]
    pub fn invalid_flight_code(code: impl Into<String>) -> Self {
        Self::InvalidFlightCode { code: code.into() }
    }

    /// Create a seat unavailable error.
    #[must_use]
    pub fn seat_unavailable(flight: impl Into<String>, seat: u32) -> Self {
        Self::SeatUnavailable {
            flight: flight.into(),
            seat,
        }
    }

    /// Create an invalid date error from the raw input.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create a reservation-not-found error.
    #[must_use]
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::ReservationNotFound { code: code.into() }
    }

    /// Check if this error is a validation failure (user input was rejected).
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFlightCode { .. }
                | Self::SeatOutOfRange { .. }
                | Self::SeatUnavailable { .. }
                | Self::InvalidDate { .. }
        )
    }

    /// Check if this error indicates the store is at capacity.
    #[must_use]
    pub fn is_store_full(&self) -> bool {
        matches!(self, Self::StoreFull { .. })
    }
}
