//! Reservation lifecycle manager.
//!
//! [`ReservationManager`] owns the legal states of a reservation and the
//! operations that move it between them. It is the single entry point that
//! front ends (CLI, MCP server, the booking wizard) use to create, read and
//! transition reservations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │      Store      │
//! │ (params in,     │───▶│ (create, get,   │───▶│ (SQLite or      │
//! │  records out)   │    │  set_status...) │    │  in-memory)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │  Notification   │
//!                        │  sink (best     │
//!                        │  effort)        │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`ReservationManager`] instances
//! - [`ops`]: Lifecycle operations and the transition checks
//! - [`handlers`]: Parameter-based entry points shared by the CLI and MCP
//!
//! ## Authorization
//!
//! Anyone may create a reservation. Status and progress changes require
//! [`Actor::Administrator`]; a customer attempting one receives
//! [`RentalError::Forbidden`](crate::RentalError::Forbidden).
//!
//! ## Timeouts
//!
//! Each store call runs under a bounded timeout. A timeout surfaces as
//! [`RentalError::DependencyUnavailable`](crate::RentalError::DependencyUnavailable)
//! and leaves the caller free to retry. Writes hand the store a deadline
//! equal to the timeout; the store rolls back anything it could not commit
//! by then, so a timed-out create or transition never lands later. Notification delivery has its own
//! timeout and its failures are only logged.
//!
//! # Usage Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rentwise_core::{
//!     lifecycle::{Actor, ReservationManagerBuilder},
//!     models::{RentalRequest, ReservationStatus},
//!     store::MemoryStore,
//! };
//!
//! # async fn example() -> rentwise_core::Result<()> {
//! let manager = ReservationManagerBuilder::new()
//!     .with_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .await?;
//!
//! let mut request = RentalRequest::default();
//! request.vehicle_id = "suv-7".into();
//! request.daily_rate = 120.0;
//! request.pickup_date = "2024-06-01".into();
//! request.return_date = "2024-06-04".into();
//!
//! let quote = manager.quote(&request)?;
//! let reservation = manager.create(&request, &quote).await?;
//! assert_eq!(reservation.status, ReservationStatus::Pending);
//!
//! let confirmed = manager
//!     .set_status(Actor::Administrator, reservation.id, ReservationStatus::Confirmed)
//!     .await?;
//! assert_eq!(confirmed.status, ReservationStatus::Confirmed);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};
use tokio::time::timeout;

use crate::{
    config::PricingConfig,
    error::{RentalError, Result},
    models::{PriceBreakdown, RentalRequest},
    notify::{Notification, NotificationSink},
    pricing,
    store::ReservationStore,
    wizard::BookingWizard,
};

pub mod builder;
pub mod handlers;
pub mod ops;


pub use builder::ReservationManagerBuilder;

/// How long past its deadline a write is still awaited. Stores enforce the
/// deadline themselves; this only bounds one that ignores it.
const WRITE_GRACE: Duration = Duration::from_millis(500);

/// Who is asking for a lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// The person who submitted the booking
    Customer,
    /// Back-office operator using the admin console
    Administrator,
}

impl Actor {
    pub(crate) fn require_administrator(self, operation: &str) -> Result<()> {
        match self {
            Actor::Administrator => Ok(()),
            Actor::Customer => Err(RentalError::Forbidden {
                operation: operation.to_string(),
            }),
        }
    }
}

/// Main interface for pricing, creating and transitioning reservations.
pub struct ReservationManager {
    store: Arc<dyn ReservationStore>,
    notifier: Arc<dyn NotificationSink>,
    pricing: PricingConfig,
    store_timeout: Duration,
    notification_timeout: Duration,
}

impl ReservationManager {
    pub(crate) fn new(
        store: Arc<dyn ReservationStore>,
        notifier: Arc<dyn NotificationSink>,
        pricing: PricingConfig,
        store_timeout: Duration,
        notification_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            pricing,
            store_timeout,
            notification_timeout,
        }
    }

    /// Quotes a request against this manager's rate card.
    pub fn quote(&self, request: &RentalRequest) -> Result<PriceBreakdown> {
        pricing::quote(request, &self.pricing)
    }

    /// Starts a booking wizard that prices with the same rate card.
    pub fn start_booking(&self) -> BookingWizard {
        BookingWizard::new(self.pricing)
    }

    /// Runs a store read under the store timeout.
    async fn call_store<T, F>(&self, operation: &str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "Reservation store did not answer '{operation}' within {:?}",
                    self.store_timeout
                );
                Err(RentalError::store_unavailable(format!(
                    "'{operation}' timed out after {:?}",
                    self.store_timeout
                )))
            }
        }
    }

    /// Runs a store write that must be durable by `now + store_timeout` or
    /// not at all.
    ///
    /// The store reports a missed deadline itself, after rolling back. The
    /// outer timeout only fires for a store that ignores the deadline, in
    /// which case the outcome of the write is unknown.
    async fn call_store_write<T, F, C>(&self, operation: &str, call: C) -> Result<T>
    where
        C: FnOnce(Instant) -> F,
        F: Future<Output = Result<T>>,
    {
        let deadline = Instant::now() + self.store_timeout;
        let limit = self.store_timeout + WRITE_GRACE;

        match timeout(limit, call(deadline)).await {
            Ok(Err(e @ RentalError::DependencyUnavailable { .. })) => {
                warn!("Reservation store gave up on '{operation}': {e}");
                Err(e)
            }
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "Reservation store ignored the deadline of '{operation}' and did not answer within {limit:?}; the write may still land"
                );
                Err(RentalError::store_unavailable(format!(
                    "'{operation}' timed out after {limit:?}"
                )))
            }
        }
    }

    /// Delivers a notification, swallowing failures and timeouts.
    async fn notify(&self, notification: Notification) {
        match timeout(
            self.notification_timeout,
            self.notifier.deliver(&notification),
        )
        .await
        {
            Ok(Ok(())) => debug!("Notification delivered: {notification}"),
            Ok(Err(e)) => warn!(
                "Notification for reservation {} not delivered: {e}",
                notification.reservation_id
            ),
            Err(_) => warn!(
                "Notification for reservation {} timed out after {:?}",
                notification.reservation_id, self.notification_timeout
            ),
        }
    }
}
