//! Interactive menu shell.
//!
//! The shell drives the whole system: it renders the flight catalog and the
//! numbered menu, reads the user's choice, and dispatches into one of the
//! five workflows. Every workflow either completes or aborts back to the
//! main menu on the first validation failure; every successful mutation is
//! persisted before the next prompt.
//!
//! The shell is generic over its input and output streams so tests can
//! drive it with scripted byte buffers.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::catalog::FlightCatalog;
use crate::error::{Error, Result};
use crate::model::{BookingDate, Reservation};
use crate::pricing;
use crate::store::ReservationStore;
use crate::validate;

/// A parsed main-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Book a ticket.
    Book,
    /// Cancel a ticket.
    Cancel,
    /// Modify a reservation.
    Modify,
    /// Check seat availability on a flight.
    CheckAvailability,
    /// Display the passenger list for a flight.
    ListPassengers,
    /// Exit the program.
    Exit,
}

impl MenuChoice {
    /// Parse a menu choice from the raw input line.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Book),
            "2" => Some(Self::Cancel),
            "3" => Some(Self::Modify),
            "4" => Some(Self::CheckAvailability),
            "5" => Some(Self::ListPassengers),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive reservation shell.
#[derive(Debug)]
pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    catalog: &'a FlightCatalog,
    store: &'a mut ReservationStore,
    max_seats: u32,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over the given streams, catalog, and store.
    pub fn new(
        input: R,
        output: W,
        catalog: &'a FlightCatalog,
        store: &'a mut ReservationStore,
        max_seats: u32,
    ) -> Self {
        Self {
            input,
            output,
            catalog,
            store,
            max_seats,
        }
    }

    /// Run the menu loop until the user chooses Exit or input ends.
    ///
    /// Workflow failures are reported and control returns to the menu; only
    /// I/O failures on the streams themselves end the loop early.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the streams fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render_menu()?;
            let Some(line) = self.read_choice()? else {
                // EOF on stdin: nothing more to do.
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Thank you for using the system. Goodbye!")?;
                break;
            }

            let outcome = match choice {
                MenuChoice::Book => self.book(),
                MenuChoice::Cancel => self.cancel(),
                MenuChoice::Modify => self.modify(),
                MenuChoice::CheckAvailability => self.check_availability(),
                MenuChoice::ListPassengers => self.list_passengers(),
                MenuChoice::Exit => unreachable!(),
            };

            // Every workflow error is recovered here: report it and return
            // to the menu.
            if let Err(err) = outcome {
                warn!("Workflow aborted: {err}");
                writeln!(self.output, "Error: {err}")?;
            }
        }
        Ok(())
    }

    fn render_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "========================================")?;
        writeln!(self.output, "         Airline Reservation System      ")?;
        writeln!(self.output, "========================================")?;
        write!(self.output, "{}", self.catalog.render_table())?;
        writeln!(self.output)?;
        writeln!(self.output, "1. Book a Ticket")?;
        writeln!(self.output, "2. Cancel a Ticket")?;
        writeln!(self.output, "3. Modify Reservation")?;
        writeln!(self.output, "4. Check Seat Availability")?;
        writeln!(self.output, "5. Display Passenger List")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn read_choice(&mut self) -> Result<Option<String>> {
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Print a prompt and read one line, trailing newline stripped.
    /// EOF reads as an empty line, which every validation rejects.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(String::new());
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Booking workflow.
    ///
    /// Validation order: flight code, seat range, seat availability, date.
    /// The confirmation code is generated only after everything passed.
    fn book(&mut self) -> Result<()> {
        if self.store.is_full() {
            return Err(Error::StoreFull {
                capacity: self.store.capacity(),
            });
        }

        let passenger = self.prompt("Enter passenger name: ")?;

        let flight = self.prompt("Enter flight number (from available flights above): ")?;
        if !self.catalog.contains(&flight) {
            return Err(Error::invalid_flight_code(flight));
        }

        let seat_input =
            self.prompt(&format!("Enter desired seat number (1 to {}): ", self.max_seats))?;
        let seat: u32 = seat_input.trim().parse().unwrap_or(0);
        if !validate::seat_in_range(seat, self.max_seats) {
            return Err(Error::SeatOutOfRange {
                seat,
                max: self.max_seats,
            });
        }
        if !self.store.is_seat_available(&flight, seat, None) {
            return Err(Error::seat_unavailable(flight, seat));
        }

        let date_input = self.prompt("Enter booking date (DD/MM/YYYY): ")?;
        let booked_on = BookingDate::parse(&date_input);
        if !booked_on.is_valid() {
            return Err(Error::invalid_date(date_input));
        }

        let is_peak = booked_on.is_peak_season();
        let price = pricing::ticket_price(is_peak);
        let confirmation = self.store.next_confirmation();

        self.store.add(Reservation {
            passenger,
            flight_code: flight,
            seat,
            confirmation: confirmation.clone(),
            price,
            booked_on,
        })?;
        self.store.persist()?;
        info!("Booked {confirmation}");

        writeln!(
            self.output,
            "Booking successful! Your confirmation code is: {confirmation}"
        )?;
        writeln!(self.output, "Ticket Price: ${price:.2}")?;
        if is_peak {
            writeln!(
                self.output,
                "Note: Peak season pricing applied ({:.0}% increase)",
                pricing::SEASONAL_INCREMENT * 100.0
            )?;
        }
        Ok(())
    }

    /// Cancellation workflow.
    fn cancel(&mut self) -> Result<()> {
        let code = self.prompt("Enter your confirmation code to cancel the reservation: ")?;

        let Some(reservation) = self.store.find_by_confirmation(&code).cloned() else {
            return Err(Error::not_found(code));
        };

        let refund = pricing::refund_amount(reservation.price);
        writeln!(self.output, "Reservation found:")?;
        writeln!(self.output, "Passenger: {}", reservation.passenger)?;
        writeln!(
            self.output,
            "Flight: {}, Seat: {}",
            reservation.flight_code, reservation.seat
        )?;
        writeln!(self.output, "Booking Date: {}", reservation.booked_on)?;
        writeln!(self.output, "Original Price: ${:.2}", reservation.price)?;
        writeln!(
            self.output,
            "Refund Amount (after {:.0}% cancellation fee): ${refund:.2}",
            pricing::CANCELLATION_FEE * 100.0
        )?;

        self.store.remove_by_confirmation(&code);
        self.store.persist()?;
        info!("Cancelled {code}");

        writeln!(
            self.output,
            "Your reservation has been canceled successfully."
        )?;
        Ok(())
    }

    /// Modification workflow.
    ///
    /// Each field is handled independently: empty (or 0 for the seat) keeps
    /// the current value, an invalid new value warns and keeps the old one.
    /// The price is recomputed from the resulting date in every case.
    fn modify(&mut self) -> Result<()> {
        let code = self.prompt("Enter your confirmation code to modify the reservation: ")?;

        let Some(current) = self.store.find_by_confirmation(&code).cloned() else {
            return Err(Error::not_found(code));
        };

        writeln!(self.output, "Current Reservation Details:")?;
        writeln!(self.output, "Passenger: {}", current.passenger)?;
        writeln!(self.output, "Flight: {}", current.flight_code)?;
        writeln!(self.output, "Seat: {}", current.seat)?;
        writeln!(self.output, "Booking Date: {}", current.booked_on)?;
        writeln!(self.output, "Price: ${:.2}", current.price)?;

        let mut updated = current;

        writeln!(self.output)?;
        let name = self.prompt("Enter new passenger name (or press Enter to keep current): ")?;
        if !name.is_empty() {
            updated.passenger = name;
        }

        writeln!(
            self.output,
            "Enter new flight number (or press Enter to keep current, from available flights):"
        )?;
        write!(self.output, "{}", self.catalog.render_table())?;
        let flight = self.prompt("")?;
        if !flight.is_empty() {
            if self.catalog.contains(&flight) {
                updated.flight_code = flight;
            } else {
                writeln!(self.output, "Invalid flight number. Keeping original flight.")?;
            }
        }

        let seat_input = self.prompt(&format!(
            "Enter new seat number (1 to {}, or 0 to keep current): ",
            self.max_seats
        ))?;
        let seat: u32 = seat_input.trim().parse().unwrap_or(0);
        if validate::seat_in_range(seat, self.max_seats) {
            // Availability on the (possibly updated) flight, ignoring the
            // reservation's own current seat.
            if self
                .store
                .is_seat_available(&updated.flight_code, seat, Some(updated.confirmation.as_str()))
            {
                updated.seat = seat;
            } else {
                writeln!(
                    self.output,
                    "Seat {seat} is not available. Keeping original seat."
                )?;
            }
        }

        let date_input =
            self.prompt("Enter new booking date (DD/MM/YYYY, or press Enter to keep current): ")?;
        if !date_input.is_empty() {
            let new_date = BookingDate::parse(&date_input);
            if new_date.is_valid() {
                updated.booked_on = new_date;
            } else {
                writeln!(self.output, "Invalid date. Keeping original booking date.")?;
            }
        }

        // The price is never carried over; it is always re-derived from the
        // date the reservation ends up with.
        let is_peak = updated.booked_on.is_peak_season();
        updated.price = pricing::ticket_price(is_peak);

        let confirmation = updated.confirmation.clone();
        if let Some(slot) = self.store.find_by_confirmation_mut(&confirmation) {
            *slot = updated.clone();
        }
        self.store.persist()?;
        info!("Modified {confirmation}");

        writeln!(self.output, "Reservation modified successfully!")?;
        writeln!(self.output, "Updated Price: ${:.2}", updated.price)?;
        if is_peak {
            writeln!(
                self.output,
                "Note: Peak season pricing applied ({:.0}% increase)",
                pricing::SEASONAL_INCREMENT * 100.0
            )?;
        }
        Ok(())
    }

    /// Seat availability query. Read-only.
    fn check_availability(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Enter flight number to check seat availability (from available flights):"
        )?;
        write!(self.output, "{}", self.catalog.render_table())?;
        let flight = self.prompt("")?;
        if !self.catalog.contains(&flight) {
            return Err(Error::invalid_flight_code(flight));
        }

        let taken: Vec<u32> = self
            .store
            .list_by_flight(&flight)
            .iter()
            .map(|r| r.seat)
            .collect();

        writeln!(
            self.output,
            "Seat availability for flight {flight} (X = reserved):"
        )?;
        let mut free = 0u32;
        for seat in 1..=self.max_seats {
            if taken.contains(&seat) {
                write!(self.output, "  X ")?;
            } else {
                write!(self.output, "{seat:3} ")?;
                free += 1;
            }
            if seat % 10 == 0 {
                writeln!(self.output)?;
            }
        }
        writeln!(self.output)?;
        writeln!(self.output, "Total available seats: {free}")?;
        // Display the off-peak price; the real price depends on the date
        // chosen at booking time.
        writeln!(
            self.output,
            "Current ticket price: ${:.2}",
            pricing::ticket_price(false)
        )?;
        Ok(())
    }

    /// Passenger list query. Read-only.
    fn list_passengers(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Enter flight number to display passenger list (from available flights):"
        )?;
        write!(self.output, "{}", self.catalog.render_table())?;
        let flight = self.prompt("")?;
        if !self.catalog.contains(&flight) {
            return Err(Error::invalid_flight_code(flight));
        }

        let passengers = self.store.list_by_flight(&flight);

        writeln!(self.output)?;
        writeln!(self.output, "Passenger List for Flight {flight}")?;
        let rule = "+--------------------------------+------------+--------+-------------+---------------+";
        writeln!(self.output, "{rule}")?;
        writeln!(
            self.output,
            "| Passenger Name                 | Seat Number| PNR    | Ticket Price| Booking Date  |"
        )?;
        writeln!(self.output, "{rule}")?;
        for r in &passengers {
            writeln!(
                self.output,
                "| {:<30} | {:>10} | {:<6} | ${:>10.2} | {}    |",
                r.passenger, r.seat, r.confirmation, r.price, r.booked_on
            )?;
        }
        writeln!(self.output, "{rule}")?;

        if passengers.is_empty() {
            writeln!(self.output, "No passengers found for flight {flight}.")?;
        }
        Ok(())
    }
}
