//! Reservation store and flat-file persistence.
//!
//! This module owns the in-memory table of live reservations, the
//! confirmation-code counter, and the data file the table is persisted to.
//! Every lookup is a linear scan; the table is small and bounded by a
//! configured capacity.

pub mod codec;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::Reservation;

/// First confirmation-code suffix issued in a session.
///
/// The counter is process-wide and is not recovered from persisted data.
/// After a restart, fresh codes can collide with codes already on disk;
/// the store logs a warning when loaded data makes that possible.
pub const CONFIRMATION_SEED: u64 = 1000;

/// The ordered, capacity-bounded collection of live reservations.
///
/// Mutations are write-through: callers invoke [`ReservationStore::persist`]
/// after every successful change, rewriting the data file in full. A failed
/// write leaves the in-memory state ahead of disk; there is no rollback.
#[derive(Debug)]
pub struct ReservationStore {
    /// Path to the data file, or `None` for an in-memory store.
    path: Option<PathBuf>,
    /// Live reservations in insertion order.
    reservations: Vec<Reservation>,
    /// Maximum number of live reservations.
    capacity: usize,
    /// Next confirmation-code suffix to issue.
    next_code: u64,
}

impl ReservationStore {
    /// Open a store backed by the data file at the given path.
    ///
    /// Creates parent directories if needed. A missing file is not an
    /// error: the store starts empty. Lines are read in file order and the
    /// load stops at the first line that does not match the expected shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or an
    /// existing file cannot be read.
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut store = Self {
            path: Some(path.clone()),
            reservations: Vec::new(),
            capacity,
            next_code: CONFIRMATION_SEED,
        };

        if path.exists() {
            debug!("Loading reservations from {}", path.display());
            let contents = fs::read_to_string(&path).map_err(|source| Error::DataFileOpen {
                path: path.clone(),
                source,
            })?;
            store.load_lines(&contents);
            info!(
                "Loaded {} reservation(s) from {}",
                store.reservations.len(),
                path.display()
            );
        } else {
            debug!("No data file at {}, starting empty", path.display());
        }

        Ok(store)
    }

    /// Create an in-memory store for testing. [`ReservationStore::persist`]
    /// becomes a no-op.
    #[must_use]
    pub fn open_in_memory(capacity: usize) -> Self {
        Self {
            path: None,
            reservations: Vec::new(),
            capacity,
            next_code: CONFIRMATION_SEED,
        }
    }

    fn load_lines(&mut self, contents: &str) {
        for line in contents.lines() {
            match codec::parse_line(line) {
                Some(reservation) => {
                    if self.reservations.len() >= self.capacity {
                        warn!("Data file holds more than {} reservations, truncating", self.capacity);
                        break;
                    }
                    self.reservations.push(reservation);
                }
                None => {
                    // Matches the historical loader: a malformed line ends
                    // the load, remaining lines are dropped.
                    warn!("Malformed line in data file, stopping load");
                    break;
                }
            }
        }

        // The counter is seeded from a constant, not from the file. Surface
        // the known collision window instead of silently reseeding.
        if self
            .reservations
            .iter()
            .filter_map(|r| r.confirmation.strip_prefix("PNR"))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .any(|suffix| suffix >= self.next_code)
        {
            warn!(
                "Loaded confirmation codes at or beyond the session seed {}; \
                 newly issued codes may collide with persisted ones",
                self.next_code
            );
        }
    }

    /// Path to the data file, if this store is file-backed.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of live reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Check whether the store holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// The configured capacity bound.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check whether the store is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.reservations.len() >= self.capacity
    }

    /// All live reservations in store order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Issue the next confirmation code.
    ///
    /// The counter increments on every call and is never decremented, so
    /// codes are strictly increasing within a session even across
    /// cancellations. Callers generate a code only after all validations
    /// have passed.
    pub fn next_confirmation(&mut self) -> String {
        let code = format!("PNR{}", self.next_code);
        self.next_code += 1;
        code
    }

    /// Append a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreFull`] if the store is at capacity.
    pub fn add(&mut self, reservation: Reservation) -> Result<()> {
        if self.is_full() {
            return Err(Error::StoreFull {
                capacity: self.capacity,
            });
        }
        debug!(
            "Adding reservation {} for flight {} seat {}",
            reservation.confirmation, reservation.flight_code, reservation.seat
        );
        self.reservations.push(reservation);
        Ok(())
    }

    /// Find a reservation by its confirmation code.
    #[must_use]
    pub fn find_by_confirmation(&self, code: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.confirmation == code)
    }

    /// Find a reservation by confirmation code, returning a mutable
    /// reference for in-place modification.
    pub fn find_by_confirmation_mut(&mut self, code: &str) -> Option<&mut Reservation> {
        self.reservations.iter_mut().find(|r| r.confirmation == code)
    }

    /// Remove a reservation by its confirmation code.
    ///
    /// Removal preserves the relative order of the remaining entries.
    /// Returns the removed reservation, or `None` if the code is unknown.
    pub fn remove_by_confirmation(&mut self, code: &str) -> Option<Reservation> {
        let index = self.reservations.iter().position(|r| r.confirmation == code)?;
        let removed = self.reservations.remove(index);
        debug!("Removed reservation {}", removed.confirmation);
        Some(removed)
    }

    /// All reservations on the given flight, in store order.
    #[must_use]
    pub fn list_by_flight(&self, code: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.flight_code == code)
            .collect()
    }

    /// Check whether a (flight, seat) pair is free.
    ///
    /// `excluding` names a confirmation code to ignore, so a reservation
    /// being modified may re-confirm its own seat.
    #[must_use]
    pub fn is_seat_available(&self, flight: &str, seat: u32, excluding: Option<&str>) -> bool {
        !self.reservations.iter().any(|r| {
            r.flight_code == flight
                && r.seat == seat
                && excluding.map_or(true, |code| r.confirmation != code)
        })
    }

    /// Rewrite the data file from the current in-memory state.
    ///
    /// The file is overwritten in full, one line per reservation in store
    /// order. In-memory stores skip the write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written. The
    /// in-memory state is unaffected either way.
    pub fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            debug!("In-memory store, skipping persist");
            return Ok(());
        };

        let mut file = fs::File::create(path).map_err(|source| Error::DataFileOpen {
            path: path.clone(),
            source,
        })?;
        for reservation in &self.reservations {
            writeln!(file, "{}", codec::encode_line(reservation))?;
        }
        debug!(
            "Persisted {} reservation(s) to {}",
            self.reservations.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookingDate;

    fn test_store() -> ReservationStore {
        ReservationStore::open_in_memory(100)
    }

    fn reservation(confirmation: &str, flight: &str, seat: u32) -> Reservation {
        Reservation {
            passenger: "Test Passenger".to_string(),
            flight_code: flight.to_string(),
            seat,
            confirmation: confirmation.to_string(),
            price: 150.0,
            booked_on: BookingDate::new(10, 3, 2026),
        }
    }

    fn temp_data_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("skyledger_test_{}_{}.txt", tag, std::process::id()))
    }

    #[test]
    fn test_open_in_memory_starts_empty() {
        let store = test_store();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.path().is_none());
    }

    #[test]
    fn test_add_and_find() {
        let mut store = test_store();
        store.add(reservation("PNR1000", "FL123", 5)).unwrap();

        let found = store.find_by_confirmation("PNR1000").unwrap();
        assert_eq!(found.flight_code, "FL123");
        assert_eq!(found.seat, 5);
        assert!(store.find_by_confirmation("PNR9999").is_none());
    }

    #[test]
    fn test_add_at_capacity() {
        let mut store = ReservationStore::open_in_memory(2);
        store.add(reservation("PNR1000", "FL123", 1)).unwrap();
        store.add(reservation("PNR1001", "FL123", 2)).unwrap();

        let err = store.add(reservation("PNR1002", "FL123", 3)).unwrap_err();
        assert!(err.is_store_full());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = test_store();
        store.add(reservation("PNR1000", "FL123", 1)).unwrap();
        store.add(reservation("PNR1001", "FL456", 2)).unwrap();
        store.add(reservation("PNR1002", "FL789", 3)).unwrap();

        let removed = store.remove_by_confirmation("PNR1001").unwrap();
        assert_eq!(removed.flight_code, "FL456");

        let codes: Vec<&str> = store
            .reservations()
            .iter()
            .map(|r| r.confirmation.as_str())
            .collect();
        assert_eq!(codes, ["PNR1000", "PNR1002"]);
    }

    #[test]
    fn test_remove_unknown() {
        let mut store = test_store();
        assert!(store.remove_by_confirmation("PNR1000").is_none());
    }

    #[test]
    fn test_confirmation_codes_strictly_increasing() {
        let mut store = test_store();
        let first = store.next_confirmation();
        let second = store.next_confirmation();
        assert_eq!(first, "PNR1000");
        assert_eq!(second, "PNR1001");

        // Cancellation never rewinds the counter.
        store.add(reservation(&second, "FL123", 1)).unwrap();
        store.remove_by_confirmation(&second);
        assert_eq!(store.next_confirmation(), "PNR1002");
    }

    #[test]
    fn test_seat_availability() {
        let mut store = test_store();
        store.add(reservation("PNR1000", "FL123", 5)).unwrap();

        assert!(!store.is_seat_available("FL123", 5, None));
        assert!(store.is_seat_available("FL123", 6, None));
        // Same seat on another flight is free.
        assert!(store.is_seat_available("FL456", 5, None));
    }

    #[test]
    fn test_seat_availability_excluding_self() {
        let mut store = test_store();
        store.add(reservation("PNR1000", "FL123", 5)).unwrap();
        store.add(reservation("PNR1001", "FL123", 6)).unwrap();

        // A reservation may re-confirm its own seat.
        assert!(store.is_seat_available("FL123", 5, Some("PNR1000")));
        // But not someone else's.
        assert!(!store.is_seat_available("FL123", 6, Some("PNR1000")));
    }

    #[test]
    fn test_list_by_flight_in_store_order() {
        let mut store = test_store();
        store.add(reservation("PNR1000", "FL123", 1)).unwrap();
        store.add(reservation("PNR1001", "FL456", 2)).unwrap();
        store.add(reservation("PNR1002", "FL123", 3)).unwrap();

        let on_flight = store.list_by_flight("FL123");
        assert_eq!(on_flight.len(), 2);
        assert_eq!(on_flight[0].confirmation, "PNR1000");
        assert_eq!(on_flight[1].confirmation, "PNR1002");
        assert!(store.list_by_flight("FL202").is_empty());
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut store = test_store();
        store.add(reservation("PNR1000", "FL123", 5)).unwrap();

        store.find_by_confirmation_mut("PNR1000").unwrap().seat = 9;
        assert_eq!(store.find_by_confirmation("PNR1000").unwrap().seat, 9);
    }

    #[test]
    fn test_persist_and_reload_round_trip() {
        let path = temp_data_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut store = ReservationStore::open(&path, 100).unwrap();
        for i in 0..4u32 {
            let code = store.next_confirmation();
            let mut r = reservation(&code, "FL123", i + 1);
            r.passenger = format!("Passenger Number {i}");
            store.add(r).unwrap();
        }
        store.persist().unwrap();

        let reloaded = ReservationStore::open(&path, 100).unwrap();
        assert_eq!(reloaded.reservations(), store.reservations());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_open_missing_file_is_empty_store() {
        let path = temp_data_path("missing");
        let _ = fs::remove_file(&path);

        let store = ReservationStore::open(&path, 100).unwrap();
        assert!(store.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("skyledger_test_dirs_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("reservations.txt");

        let store = ReservationStore::open(&path, 100).unwrap();
        store.persist().unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_line_stops_load() {
        let path = temp_data_path("malformed");
        fs::write(
            &path,
            "\"First\" FL123 1 PNR1000 150.00 01/01/2026\n\
             not a reservation line\n\
             \"Third\" FL123 3 PNR1002 150.00 01/01/2026\n",
        )
        .unwrap();

        let store = ReservationStore::open(&path, 100).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.reservations()[0].passenger, "First");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_counter_not_reseeded_from_file() {
        let path = temp_data_path("reseed");
        fs::write(&path, "\"Early Bird\" FL123 1 PNR1500 150.00 01/01/2026\n").unwrap();

        let mut store = ReservationStore::open(&path, 100).unwrap();
        // Seed is a session constant even when the file holds later codes.
        assert_eq!(store.next_confirmation(), "PNR1000");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_respects_capacity() {
        let path = temp_data_path("capacity");
        fs::write(
            &path,
            "\"One\" FL123 1 PNR1000 150.00 01/01/2026\n\
             \"Two\" FL123 2 PNR1001 150.00 01/01/2026\n\
             \"Three\" FL123 3 PNR1002 150.00 01/01/2026\n",
        )
        .unwrap();

        let store = ReservationStore::open(&path, 2).unwrap();
        assert_eq!(store.len(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_persist_in_memory_is_noop() {
        let mut store = test_store();
        store.add(reservation("PNR1000", "FL123", 1)).unwrap();
        assert!(store.persist().is_ok());
    }
}
