//! `skyledger` - An airline reservation ledger with a flat-file store
//!
//! This library provides the core functionality for managing reservations
//! over a fixed flight catalog: booking, cancellation, modification, and
//! read-only queries, persisted to a line-oriented text file.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod pricing;
pub mod shell;
pub mod store;
pub mod validate;

pub use catalog::FlightCatalog;
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use model::{BookingDate, Flight, Reservation};
pub use shell::Shell;
pub use store::ReservationStore;
