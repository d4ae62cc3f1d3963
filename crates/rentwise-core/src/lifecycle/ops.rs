//! Lifecycle operations for the ReservationManager.

use log::{debug, info};

use super::{Actor, ReservationManager};
use crate::{
    error::{RentalError, Result},
    models::{
        PriceBreakdown, ProgressUpdate, RentalRequest, Reservation, ReservationFilter,
        ReservationStatus,
    },
    notify::Notification,
};

impl ReservationManager {
    /// Persists a submitted request in `pending` with the quote it was shown.
    ///
    /// Any caller may create. The customer is notified once the record
    /// exists; a failed or slow notification does not fail the call.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::DependencyUnavailable` if the store does not
    /// commit in time. The store rolls the insert back in that case, so the
    /// call may be retried without creating a duplicate.
    pub async fn create(
        &self,
        request: &RentalRequest,
        quote: &PriceBreakdown,
    ) -> Result<Reservation> {
        let reservation = self
            .call_store_write("insert", |deadline| {
                self.store.insert(request, quote, deadline)
            })
            .await?;
        info!(
            "Created reservation {} for {} ({} days, total {:.2})",
            reservation.id,
            reservation.request.customer_name(),
            quote.days,
            reservation.total_price
        );

        self.notify(Notification::created(&reservation)).await;
        Ok(reservation)
    }

    /// Fetches a reservation snapshot.
    pub async fn get(&self, id: u64) -> Result<Reservation> {
        self.call_store("get", self.store.get(id))
            .await?
            .ok_or(RentalError::ReservationNotFound { id })
    }

    /// Lists reservations, newest first.
    pub async fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        self.call_store("list", self.store.list(filter)).await
    }

    /// Moves a reservation along one outbound edge of the state machine.
    ///
    /// The current status is read, the edge is checked, and the write is
    /// applied only if the stored status is still the one that was checked.
    /// Of two administrators acting on the same stale status, the second
    /// receives `InvalidTransition` naming the status the first one wrote.
    ///
    /// # Errors
    ///
    /// - `RentalError::Forbidden` unless `actor` is an administrator
    /// - `RentalError::ReservationNotFound` if no such reservation exists
    /// - `RentalError::InvalidTransition` if `next` is not reachable from the
    ///   current status; the record is left untouched
    /// - `RentalError::DependencyUnavailable` if the store times out
    pub async fn set_status(
        &self,
        actor: Actor,
        id: u64,
        next: ReservationStatus,
    ) -> Result<Reservation> {
        actor.require_administrator("set_status")?;

        let current = self.get(id).await?;
        if !current.status.can_transition_to(next) {
            return Err(RentalError::InvalidTransition {
                id,
                from: current.status,
                to: next,
            });
        }

        let updated = self
            .call_store_write("compare_and_set_status", |deadline| {
                self.store
                    .compare_and_set_status(id, current.status, next, deadline)
            })
            .await?;

        let Some(updated) = updated else {
            // Another writer got there first; report what it left behind
            let actual = self.get(id).await?;
            debug!(
                "Lost status race on reservation {id}: expected {}, found {}",
                current.status, actual.status
            );
            return Err(RentalError::InvalidTransition {
                id,
                from: actual.status,
                to: next,
            });
        };

        info!(
            "Reservation {id} moved from {} to {}",
            current.status, updated.status
        );
        self.notify(Notification::status_changed(&updated, current.status))
            .await;
        Ok(updated)
    }

    /// Records fulfillment progress. Never touches the status.
    ///
    /// # Errors
    ///
    /// - `RentalError::Forbidden` unless `actor` is an administrator
    /// - `RentalError::InvalidInput` on field `progress` outside `0..=100`
    /// - `RentalError::ReservationNotFound` if no such reservation exists
    pub async fn set_progress(&self, actor: Actor, id: u64, progress: i64) -> Result<Reservation> {
        actor.require_administrator("set_progress")?;
        let update = ProgressUpdate::new(id, progress)?;

        let updated = self
            .call_store_write("set_progress", |deadline| {
                self.store
                    .set_progress(update.id, update.progress, deadline)
            })
            .await?
            .ok_or(RentalError::ReservationNotFound { id })?;

        debug!("Reservation {id} progress set to {}%", updated.progress);
        Ok(updated)
    }

    /// `pending -> confirmed`
    pub async fn confirm(&self, actor: Actor, id: u64) -> Result<Reservation> {
        self.set_status(actor, id, ReservationStatus::Confirmed)
            .await
    }

    /// `pending | confirmed -> cancelled`
    pub async fn cancel(&self, actor: Actor, id: u64) -> Result<Reservation> {
        self.set_status(actor, id, ReservationStatus::Cancelled)
            .await
    }

    /// `confirmed -> in_transit`
    pub async fn dispatch(&self, actor: Actor, id: u64) -> Result<Reservation> {
        self.set_status(actor, id, ReservationStatus::InTransit)
            .await
    }

    /// `in_transit -> completed`
    pub async fn complete(&self, actor: Actor, id: u64) -> Result<Reservation> {
        self.set_status(actor, id, ReservationStatus::Completed)
            .await
    }
}
