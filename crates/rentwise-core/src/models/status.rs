//! Reservation lifecycle status and its transition table.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of reservation statuses.
///
/// ```text
/// pending ──▶ confirmed ──▶ in_transit ──▶ completed
///    │            │
///    └────────────┴──▶ cancelled
/// ```
///
/// `cancelled` and `completed` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Submitted by the customer, awaiting an administrator decision
    #[default]
    Pending,

    /// Accepted by an administrator
    Confirmed,

    /// Withdrawn before fulfillment
    Cancelled,

    /// Vehicle is on its way to the customer
    InTransit,

    /// Rental fulfilled
    Completed,
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" | "canceled" => Ok(ReservationStatus::Cancelled),
            "in_transit" | "intransit" | "in-transit" => Ok(ReservationStatus::InTransit),
            "completed" => Ok(ReservationStatus::Completed),
            _ => Err(format!("Invalid reservation status: {s}")),
        }
    }
}

impl ReservationStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ReservationStatus; 5] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Cancelled,
        ReservationStatus::InTransit,
        ReservationStatus::Completed,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::InTransit => "in_transit",
            ReservationStatus::Completed => "completed",
        }
    }

    /// Outbound edges of the lifecycle state machine.
    pub fn next_statuses(&self) -> &'static [ReservationStatus] {
        match self {
            ReservationStatus::Pending => {
                &[ReservationStatus::Confirmed, ReservationStatus::Cancelled]
            }
            ReservationStatus::Confirmed => {
                &[ReservationStatus::InTransit, ReservationStatus::Cancelled]
            }
            ReservationStatus::InTransit => &[ReservationStatus::Completed],
            ReservationStatus::Cancelled | ReservationStatus::Completed => &[],
        }
    }

    /// Whether `next` is a legal transition from this status.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Terminal statuses have no outbound transitions.
    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rentwise_core::models::ReservationStatus;
    ///
    /// assert_eq!(ReservationStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(ReservationStatus::Completed.with_icon(), "✓ Completed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "○ Pending",
            ReservationStatus::Confirmed => "● Confirmed",
            ReservationStatus::Cancelled => "✗ Cancelled",
            ReservationStatus::InTransit => "➤ In Transit",
            ReservationStatus::Completed => "✓ Completed",
        }
    }
}
