//! Validated request types for lifecycle operations.

use super::ReservationStatus;
use crate::RentalError;

/// Highest value accepted for fulfillment progress.
pub const MAX_PROGRESS: u8 = 100;

/// A requested lifecycle transition with a parsed target status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub id: u64,
    pub status: ReservationStatus,
}

impl TryFrom<crate::params::SetStatus> for StatusChange {
    type Error = RentalError;

    /// Parse the free-text status of a `SetStatus` request.
    ///
    /// Unknown statuses never reach the store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rentwise_core::{models::{ReservationStatus, StatusChange}, params::SetStatus};
    ///
    /// let change = StatusChange::try_from(SetStatus { id: 3, status: "in_transit".into() })?;
    /// assert_eq!(change.status, ReservationStatus::InTransit);
    ///
    /// assert!(StatusChange::try_from(SetStatus { id: 3, status: "shipped".into() }).is_err());
    /// # Ok::<(), rentwise_core::RentalError>(())
    /// ```
    fn try_from(params: crate::params::SetStatus) -> Result<Self, Self::Error> {
        let status = params.status.parse::<ReservationStatus>().map_err(|_| {
            RentalError::invalid_input("status").with_reason(format!(
                "Invalid status: {}. Must be one of pending, confirmed, cancelled, in_transit, completed",
                params.status
            ))
        })?;
        Ok(Self {
            id: params.id,
            status,
        })
    }
}

/// A fulfillment progress update known to lie within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub id: u64,
    pub progress: u8,
}

impl ProgressUpdate {
    /// Validates the percentage; values outside `0..=100` are rejected, not
    /// clamped.
    pub fn new(id: u64, progress: i64) -> Result<Self, RentalError> {
        match u8::try_from(progress) {
            Ok(progress) if progress <= MAX_PROGRESS => Ok(Self { id, progress }),
            _ => Err(RentalError::invalid_input("progress").with_reason(format!(
                "Progress must be between 0 and {MAX_PROGRESS}, got {progress}"
            ))),
        }
    }
}

impl TryFrom<crate::params::SetProgress> for ProgressUpdate {
    type Error = RentalError;

    fn try_from(params: crate::params::SetProgress) -> Result<Self, Self::Error> {
        Self::new(params.id, params.progress)
    }
}
