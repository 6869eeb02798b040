//! Line format for the reservation data file.
//!
//! Each reservation occupies one line:
//!
//! ```text
//! "<passenger>" <flight> <seat> <confirmation> <price> <DD/MM/YYYY>
//! ```
//!
//! The passenger name is quoted so it may contain spaces. There is no
//! escaping: a name containing a double quote will corrupt the line on the
//! next load. A line that does not match the shape stops the load at that
//! point (remaining lines are not read). Both behaviors are inherited from
//! the file format and kept for compatibility with existing data files.

use crate::model::{BookingDate, Reservation};

/// Encode a reservation as one data-file line (no trailing newline).
#[must_use]
pub fn encode_line(reservation: &Reservation) -> String {
    format!(
        "\"{}\" {} {} {} {:.2} {}",
        reservation.passenger,
        reservation.flight_code,
        reservation.seat,
        reservation.confirmation,
        reservation.price,
        reservation.booked_on,
    )
}

/// Parse one data-file line back into a reservation.
///
/// Returns `None` for any line that does not match the expected shape.
#[must_use]
pub fn parse_line(line: &str) -> Option<Reservation> {
    let rest = line.strip_prefix('"')?;
    let (passenger, rest) = rest.split_once('"')?;

    let mut fields = rest.split_whitespace();
    let flight_code = fields.next()?.to_string();
    let seat: u32 = fields.next()?.parse().ok()?;
    let confirmation = fields.next()?.to_string();
    let price: f64 = fields.next()?.parse().ok()?;
    let booked_on = parse_date_field(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }

    Some(Reservation {
        passenger: passenger.to_string(),
        flight_code,
        seat,
        confirmation,
        price,
        booked_on,
    })
}

/// Parse the `DD/MM/YYYY` field. Unlike [`BookingDate::parse`], a field
/// that is not three numbers rejects the whole line.
fn parse_date_field(field: &str) -> Option<BookingDate> {
    let mut parts = field.splitn(3, '/');
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    Some(BookingDate::new(day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reservation {
        Reservation {
            passenger: "Grace Hopper".to_string(),
            flight_code: "FL456".to_string(),
            seat: 7,
            confirmation: "PNR1003".to_string(),
            price: 195.0,
            booked_on: BookingDate::new(3, 7, 2026),
        }
    }

    #[test]
    fn test_encode_line_shape() {
        let line = encode_line(&sample());
        assert_eq!(line, "\"Grace Hopper\" FL456 7 PNR1003 195.00 03/07/2026");
    }

    #[test]
    fn test_round_trip() {
        let original = sample();
        let parsed = parse_line(&encode_line(&original)).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_name_with_spaces() {
        let parsed = parse_line("\"Jean Luc Picard\" FL123 1 PNR1000 150.00 01/01/2026").unwrap();
        assert_eq!(parsed.passenger, "Jean Luc Picard");
    }

    #[test]
    fn test_empty_name() {
        let parsed = parse_line("\"\" FL123 1 PNR1000 150.00 01/01/2026").unwrap();
        assert_eq!(parsed.passenger, "");
    }

    #[test]
    fn test_missing_opening_quote() {
        assert!(parse_line("Grace FL456 7 PNR1003 195.00 03/07/2026").is_none());
    }

    #[test]
    fn test_missing_fields() {
        assert!(parse_line("\"Grace\" FL456 7 PNR1003").is_none());
    }

    #[test]
    fn test_extra_fields_rejected() {
        assert!(parse_line("\"Grace\" FL456 7 PNR1003 195.00 03/07/2026 extra").is_none());
    }

    #[test]
    fn test_non_numeric_seat() {
        assert!(parse_line("\"Grace\" FL456 abc PNR1003 195.00 03/07/2026").is_none());
    }

    #[test]
    fn test_malformed_date_field() {
        assert!(parse_line("\"Grace\" FL456 7 PNR1003 195.00 03-07-2026").is_none());
    }

    #[test]
    fn test_price_formatting_two_decimals() {
        let mut reservation = sample();
        reservation.price = 150.0;
        assert!(encode_line(&reservation).contains(" 150.00 "));
    }
}
