//! The flight catalog.
//!
//! A small, read-only set of flights seeded at startup. The catalog is
//! reference data: it is never persisted and never changes while the
//! process runs.

use crate::model::Flight;

/// The read-only set of flights reservations may reference.
#[derive(Debug, Clone)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
}

impl FlightCatalog {
    /// The standard catalog of five scheduled flights.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            flights: vec![
                Flight::new("FL123", "New York", "08:00"),
                Flight::new("FL456", "London", "10:30"),
                Flight::new("FL789", "Tokyo", "14:00"),
                Flight::new("FL101", "Sydney", "16:45"),
                Flight::new("FL202", "Paris", "19:15"),
            ],
        }
    }

    /// Look up a flight by its code (case-sensitive exact match).
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.code == code)
    }

    /// Check whether a flight code is in the catalog.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// All flights, in seeded order.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Render the catalog as a boxed text table for the menu.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str("Available Flights:\n");
        out.push_str("+----------+-----------------+----------------+\n");
        out.push_str("| Flight No| Destination     | Departure Time |\n");
        out.push_str("+----------+-----------------+----------------+\n");
        for flight in &self.flights {
            out.push_str(&format!(
                "| {:<8} | {:<15} | {:<14} |\n",
                flight.code, flight.destination, flight.departure
            ));
        }
        out.push_str("+----------+-----------------+----------------+\n");
        out
    }
}

impl Default for FlightCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_size() {
        let catalog = FlightCatalog::standard();
        assert_eq!(catalog.flights().len(), 5);
    }

    #[test]
    fn test_lookup_existing() {
        let catalog = FlightCatalog::standard();
        let flight = catalog.lookup("FL789").unwrap();
        assert_eq!(flight.destination, "Tokyo");
        assert_eq!(flight.departure, "14:00");
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = FlightCatalog::standard();
        assert!(catalog.lookup("FL999").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = FlightCatalog::standard();
        assert!(catalog.contains("FL123"));
        assert!(!catalog.contains("fl123"));
    }

    #[test]
    fn test_flights_in_seeded_order() {
        let catalog = FlightCatalog::standard();
        let codes: Vec<&str> = catalog.flights().iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, ["FL123", "FL456", "FL789", "FL101", "FL202"]);
    }

    #[test]
    fn test_render_table() {
        let catalog = FlightCatalog::standard();
        let table = catalog.render_table();
        assert!(table.starts_with("Available Flights:"));
        assert!(table.contains("| FL123    | New York        | 08:00          |"));
        assert!(table.contains("| FL202    | Paris           | 19:15          |"));
    }

    #[test]
    fn test_default_is_standard() {
        let catalog = FlightCatalog::default();
        assert!(catalog.contains("FL456"));
    }
}
