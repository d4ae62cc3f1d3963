//! Collection wrapper for displaying reservation lists.

use std::fmt;

use super::format::Money;
use crate::models::Reservation;

/// Newtype wrapper for the administrative reservation list.
///
/// Each entry is a compact summary; use the [`Reservation`] display for the
/// full record.
///
/// ```rust
/// use rentwise_core::display::Reservations;
///
/// assert_eq!(Reservations(vec![]).to_string(), "No reservations found.\n");
/// ```
pub struct Reservations(pub Vec<Reservation>);

impl Reservations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reservation> {
        self.0.iter()
    }
}

impl IntoIterator for Reservations {
    type Item = Reservation;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Reservations {
    type Item = &'a Reservation;
    type IntoIter = std::slice::Iter<'a, Reservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Reservations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No reservations found.");
        }

        for reservation in &self.0 {
            let request = &reservation.request;
            writeln!(
                f,
                "## {}. {} ({})",
                reservation.id,
                request.customer_name(),
                reservation.status.with_icon()
            )?;
            writeln!(f)?;
            writeln!(
                f,
                "- **Vehicle**: {}, {} to {}",
                request.vehicle_id, request.pickup_date, request.return_date
            )?;
            writeln!(f, "- **Total**: {}", Money(reservation.total_price))?;
            writeln!(f, "- **Progress**: {}%", reservation.progress)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
