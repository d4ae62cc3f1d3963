//! Value formatters shared by the model displays.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Monetary amount rounded to two decimals for presentation.
///
/// Pricing never rounds. This wrapper is the one place amounts are cut to
/// cents, so totals and their parts can differ in the last printed digit.
///
/// ```rust
/// use rentwise_core::display::Money;
///
/// assert_eq!(Money(531.0).to_string(), "531.00");
/// assert_eq!(Money(10.005_1).to_string(), "10.01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A timestamp rendered in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}
