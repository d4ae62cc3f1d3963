//! Reservation model definition.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{PriceBreakdown, RentalRequest, ReservationStatus};

/// A submitted booking with a lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Reservation {
    /// Identifier assigned by the store
    pub id: u64,

    /// Booking details as they were at submission time
    #[serde(flatten)]
    pub request: RentalRequest,

    /// Price breakdown computed once at submission
    pub price: PriceBreakdown,

    /// Total charged, equal to `price.total`
    pub total_price: f64,

    /// Business lifecycle status
    pub status: ReservationStatus,

    /// Fulfillment percentage (0-100), independent of `status`
    pub progress: u8,

    /// Timestamp when the reservation was created (UTC)
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub created_at: Timestamp,

    /// Timestamp when the reservation was last changed (UTC)
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub updated_at: Timestamp,
}

impl Reservation {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
