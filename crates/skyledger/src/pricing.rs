//! Pricing rules for tickets and refunds.
//!
//! Pricing is purely a function of the booking date's season classification.
//! Route, seat, and demand play no part.

/// Base ticket price in dollars.
pub const BASE_TICKET_PRICE: f64 = 150.0;

/// Fractional surcharge applied during peak season (30%).
pub const SEASONAL_INCREMENT: f64 = 0.3;

/// Fraction of the ticket price retained on cancellation (20%).
pub const CANCELLATION_FEE: f64 = 0.2;

/// Compute the ticket price for the given season classification.
#[must_use]
pub fn ticket_price(is_peak: bool) -> f64 {
    if is_peak {
        BASE_TICKET_PRICE * (1.0 + SEASONAL_INCREMENT)
    } else {
        BASE_TICKET_PRICE
    }
}

/// Compute the refund for a cancelled ticket after the cancellation fee.
#[must_use]
pub fn refund_amount(price: f64) -> f64 {
    price * (1.0 - CANCELLATION_FEE)
}
