//! In-process reservation store.

use std::collections::BTreeMap;
use std::time::Instant;

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::Mutex;

use super::ReservationStore;
use crate::{
    error::{RentalError, Result},
    models::{PriceBreakdown, RentalRequest, Reservation, ReservationFilter, ReservationStatus},
};

#[derive(Debug, Default)]
struct State {
    last_id: u64,
    reservations: BTreeMap<u64, Reservation>,
}

/// Keeps reservations in memory. Every operation holds one lock, which makes
/// the status compare-and-set trivially atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Called with the lock held, right before mutating.
fn check_deadline(operation: &str, deadline: Instant) -> Result<()> {
    if Instant::now() >= deadline {
        return Err(RentalError::store_unavailable(format!(
            "'{operation}' reached its deadline before it was applied"
        )));
    }
    Ok(())
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn insert(
        &self,
        request: &RentalRequest,
        price: &PriceBreakdown,
        deadline: Instant,
    ) -> Result<Reservation> {
        let mut state = self.state.lock().await;
        check_deadline("insert", deadline)?;
        state.last_id += 1;

        let now = Timestamp::now();
        let reservation = Reservation {
            id: state.last_id,
            request: request.clone(),
            price: price.clone(),
            total_price: price.total,
            status: ReservationStatus::Pending,
            progress: 0,
            created_at: now,
            updated_at: now,
        };
        state
            .reservations
            .insert(reservation.id, reservation.clone());

        Ok(reservation)
    }

    async fn get(&self, id: u64) -> Result<Option<Reservation>> {
        Ok(self.state.lock().await.reservations.get(&id).cloned())
    }

    async fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let state = self.state.lock().await;
        // IDs grow with creation time, so reverse ID order is newest first
        Ok(state
            .reservations
            .values()
            .rev()
            .filter(|reservation| filter.matches(reservation.status))
            .cloned()
            .collect())
    }

    async fn compare_and_set_status(
        &self,
        id: u64,
        expected: ReservationStatus,
        next: ReservationStatus,
        deadline: Instant,
    ) -> Result<Option<Reservation>> {
        let mut state = self.state.lock().await;
        check_deadline("compare_and_set_status", deadline)?;
        let Some(reservation) = state.reservations.get_mut(&id) else {
            return Ok(None);
        };
        if reservation.status != expected {
            return Ok(None);
        }
        reservation.status = next;
        reservation.updated_at = Timestamp::now();
        Ok(Some(reservation.clone()))
    }

    async fn set_progress(
        &self,
        id: u64,
        progress: u8,
        deadline: Instant,
    ) -> Result<Option<Reservation>> {
        let mut state = self.state.lock().await;
        check_deadline("set_progress", deadline)?;
        Ok(state.reservations.get_mut(&id).map(|reservation| {
            reservation.progress = progress;
            reservation.updated_at = Timestamp::now();
            reservation.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{config::PricingConfig, pricing};

    fn request() -> RentalRequest {
        RentalRequest {
            vehicle_id: "suv-7".to_string(),
            daily_rate: 120.0,
            pickup_date: "2024-06-01".to_string(),
            return_date: "2024-06-04".to_string(),
            ..RentalRequest::default()
        }
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(5)
    }

    #[tokio::test]
    async fn test_expired_writes_leave_no_trace() {
        let store = MemoryStore::new();
        let request = request();
        let price = pricing::quote(&request, &PricingConfig::default()).unwrap();
        let past = Instant::now() - Duration::from_millis(1);

        let err = store.insert(&request, &price, past).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(store
            .list(&ReservationFilter::default())
            .await
            .unwrap()
            .is_empty());

        let created = store.insert(&request, &price, later()).await.unwrap();
        assert_eq!(created.id, 1);

        assert!(store
            .compare_and_set_status(
                1,
                ReservationStatus::Pending,
                ReservationStatus::Confirmed,
                past
            )
            .await
            .is_err());
        assert!(store.set_progress(1, 40, past).await.is_err());
        assert_eq!(store.get(1).await.unwrap(), Some(created));
    }
}
