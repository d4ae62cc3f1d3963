//! Handler operations that take interface parameters and return display
//! wrappers, shared by the CLI and the MCP server.

use super::{Actor, ReservationManager};
use crate::{
    display::{CreateResult, Reservations, UpdateResult},
    error::Result,
    models::{RentalRequest, Reservation, ReservationFilter, StatusChange},
    params::{Id, ListReservations, SetProgress, SetStatus},
};

impl ReservationManager {
    /// Handle a booking submitted in one piece.
    ///
    /// Runs the same completeness checks the wizard applies before its final
    /// submission, prices the request and creates the reservation.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::IncompleteStep` naming the first step with blank
    /// required fields, or any error of [`ReservationManager::create`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use rentwise_core::{models::RentalRequest, ReservationManagerBuilder};
    /// # async {
    /// let manager = ReservationManagerBuilder::new().build().await?;
    /// let request: RentalRequest = serde_json::from_str(r#"{
    ///     "vehicle_id": "suv-7", "daily_rate": 120.0,
    ///     "pickup_date": "2024-06-01", "pickup_time": "10:00",
    ///     "return_date": "2024-06-04", "return_time": "10:00",
    ///     "first_name": "Ada", "last_name": "Lovelace",
    ///     "email": "ada@example.com", "phone": "555-0100"
    /// }"#)?;
    /// let created = manager.submit_request(&request).await?;
    /// println!("{created}");
    /// # Result::<(), rentwise_core::RentalError>::Ok(())
    /// # };
    /// ```
    pub async fn submit_request(
        &self,
        request: &RentalRequest,
    ) -> Result<CreateResult<Reservation>> {
        let wizard = self.start_booking().with_draft(request.clone());
        wizard.ensure_complete()?;
        let quote = wizard.quote()?;
        let reservation = self.create(request, &quote).await?;
        Ok(CreateResult::new(reservation))
    }

    /// Handle showing a single reservation.
    pub async fn show_reservation(&self, params: &Id) -> Result<Reservation> {
        self.get(params.id).await
    }

    /// Handle listing reservations with an optional status filter.
    pub async fn list_reservations(&self, params: &ListReservations) -> Result<Reservations> {
        let filter = ReservationFilter::try_from(params)?;
        Ok(Reservations(self.list(&filter).await?))
    }

    /// Handle a status change request from an interface.
    pub async fn change_status(
        &self,
        actor: Actor,
        params: SetStatus,
    ) -> Result<UpdateResult<Reservation>> {
        let change = StatusChange::try_from(params)?;
        let reservation = self.set_status(actor, change.id, change.status).await?;
        let changes = vec![format!("Status set to {}", reservation.status)];
        Ok(UpdateResult::with_changes(reservation, changes))
    }

    /// Handle a fulfillment progress update from an interface.
    pub async fn change_progress(
        &self,
        actor: Actor,
        params: SetProgress,
    ) -> Result<UpdateResult<Reservation>> {
        let reservation = self
            .set_progress(actor, params.id, params.progress)
            .await?;
        let changes = vec![format!("Progress set to {}%", reservation.progress)];
        Ok(UpdateResult::with_changes(reservation, changes))
    }
}
