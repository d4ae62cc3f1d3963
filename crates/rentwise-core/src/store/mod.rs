//! Durable record of submitted reservations.
//!
//! The lifecycle manager talks to storage only through [`ReservationStore`],
//! so the persistence technology stays swappable. Two implementations ship
//! with the crate:
//!
//! - [`SqliteStore`]: the default, backed by [`crate::db::Database`]
//! - [`MemoryStore`]: process-local, for embedding and tests
//!
//! Implementations must apply [`ReservationStore::compare_and_set_status`]
//! atomically: of two writers starting from the same status, exactly one may
//! succeed.
//!
//! Every write carries a deadline. A write that has not become durable by
//! then must fail and leave nothing behind, so a caller that gave up waiting
//! can retry without creating a duplicate or applying a transition twice.

use std::time::Instant;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{PriceBreakdown, RentalRequest, Reservation, ReservationFilter, ReservationStatus},
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Persists a new reservation in `pending` with zero progress and
    /// returns it with its assigned ID and timestamps.
    async fn insert(
        &self,
        request: &RentalRequest,
        price: &PriceBreakdown,
        deadline: Instant,
    ) -> Result<Reservation>;

    async fn get(&self, id: u64) -> Result<Option<Reservation>>;

    /// Newest first.
    async fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>>;

    /// Writes `next` only if the stored status still equals `expected`.
    ///
    /// `Ok(None)` means the record is missing or was changed concurrently.
    async fn compare_and_set_status(
        &self,
        id: u64,
        expected: ReservationStatus,
        next: ReservationStatus,
        deadline: Instant,
    ) -> Result<Option<Reservation>>;

    /// `Ok(None)` means the record is missing.
    async fn set_progress(
        &self,
        id: u64,
        progress: u8,
        deadline: Instant,
    ) -> Result<Option<Reservation>>;
}
