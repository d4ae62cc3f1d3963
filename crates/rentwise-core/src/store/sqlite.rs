//! SQLite-backed reservation store.

use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use tokio::task;

use super::ReservationStore;
use crate::{
    db::Database,
    error::{RentalError, Result},
    models::{PriceBreakdown, RentalRequest, Reservation, ReservationFilter, ReservationStatus},
};

/// Store that opens a [`Database`] connection per call on a blocking thread.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (and if needed creates) the database so schema problems surface
    /// at startup rather than on the first booking.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        let init_path = db_path.clone();
        run_blocking(move || Database::new(&init_path).map(|_| ())).await?;
        Ok(Self { db_path })
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| RentalError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}

#[async_trait]
impl ReservationStore for SqliteStore {
    async fn insert(
        &self,
        request: &RentalRequest,
        price: &PriceBreakdown,
        deadline: Instant,
    ) -> Result<Reservation> {
        let db_path = self.db_path.clone();
        let request = request.clone();
        let price = price.clone();

        run_blocking(move || {
            let mut db = Database::with_deadline(&db_path, deadline)?;
            db.create_reservation(&request, &price)
        })
        .await
    }

    async fn get(&self, id: u64) -> Result<Option<Reservation>> {
        let db_path = self.db_path.clone();

        run_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_reservation(id)
        })
        .await
    }

    async fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let db_path = self.db_path.clone();
        let filter = filter.clone();

        run_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_reservations(&filter)
        })
        .await
    }

    async fn compare_and_set_status(
        &self,
        id: u64,
        expected: ReservationStatus,
        next: ReservationStatus,
        deadline: Instant,
    ) -> Result<Option<Reservation>> {
        let db_path = self.db_path.clone();

        run_blocking(move || {
            let mut db = Database::with_deadline(&db_path, deadline)?;
            db.transition_status(id, expected, next)
        })
        .await
    }

    async fn set_progress(
        &self,
        id: u64,
        progress: u8,
        deadline: Instant,
    ) -> Result<Option<Reservation>> {
        let db_path = self.db_path.clone();

        run_blocking(move || {
            let mut db = Database::with_deadline(&db_path, deadline)?;
            db.set_progress(id, progress)
        })
        .await
    }
}
