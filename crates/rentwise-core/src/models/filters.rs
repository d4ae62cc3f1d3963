//! Filter types for querying reservations.

use super::ReservationStatus;

/// Filter options for the administrative reservation list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationFilter {
    /// Only reservations currently in this status; all when `None`
    pub status: Option<ReservationStatus>,
}

impl ReservationFilter {
    pub fn with_status(status: ReservationStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Whether a status passes this filter.
    pub fn matches(&self, status: ReservationStatus) -> bool {
        self.status.map_or(true, |wanted| wanted == status)
    }
}

impl TryFrom<&crate::params::ListReservations> for ReservationFilter {
    type Error = crate::RentalError;

    /// Parse the optional status string of a list request.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rentwise_core::{
    ///     models::{ReservationFilter, ReservationStatus},
    ///     params::ListReservations,
    /// };
    ///
    /// let params = ListReservations { status: Some("pending".to_string()) };
    /// let filter = ReservationFilter::try_from(&params)?;
    /// assert_eq!(filter.status, Some(ReservationStatus::Pending));
    ///
    /// let filter = ReservationFilter::try_from(&ListReservations::default())?;
    /// assert_eq!(filter.status, None);
    /// # Ok::<(), rentwise_core::RentalError>(())
    /// ```
    fn try_from(params: &crate::params::ListReservations) -> Result<Self, Self::Error> {
        let status = params
            .status
            .as_deref()
            .map(str::parse::<ReservationStatus>)
            .transpose()
            .map_err(|reason| crate::RentalError::invalid_input("status").with_reason(reason))?;
        Ok(Self { status })
    }
}
