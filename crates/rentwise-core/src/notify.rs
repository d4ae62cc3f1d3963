//! Confirmation messages sent on lifecycle events.
//!
//! Delivery is best-effort: the lifecycle manager awaits a sink under a
//! bounded timeout, logs any failure and carries on. A reservation is created
//! (or transitioned) whether or not its notification arrives.

use std::fmt;

use async_trait::async_trait;
use log::info;

use crate::{
    display::Money,
    error::Result,
    models::{Reservation, ReservationStatus},
};

/// What happened to the reservation.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    Created {
        total_price: f64,
    },
    StatusChanged {
        from: ReservationStatus,
        to: ReservationStatus,
    },
}

/// A message addressed to the customer who made the reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub reservation_id: u64,
    pub recipient: String,
    pub event: NotificationEvent,
}

impl Notification {
    pub fn created(reservation: &Reservation) -> Self {
        Self {
            reservation_id: reservation.id,
            recipient: reservation.request.email.clone(),
            event: NotificationEvent::Created {
                total_price: reservation.total_price,
            },
        }
    }

    pub fn status_changed(reservation: &Reservation, from: ReservationStatus) -> Self {
        Self {
            reservation_id: reservation.id,
            recipient: reservation.request.email.clone(),
            event: NotificationEvent::StatusChanged {
                from,
                to: reservation.status,
            },
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.event {
            NotificationEvent::Created { total_price } => write!(
                f,
                "Reservation {} received, total {}",
                self.reservation_id,
                Money(*total_price)
            ),
            NotificationEvent::StatusChanged { from, to } => write!(
                f,
                "Reservation {} moved from {from} to {to}",
                self.reservation_id
            ),
        }
    }
}

/// Fire-and-forget delivery channel (email, SMS, webhook, ...).
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, notification: &Notification) -> Result<()>;
}

/// Sink that records notifications in the application log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn deliver(&self, notification: &Notification) -> Result<()> {
        info!("Notify {}: {}", notification.recipient, notification);
        Ok(())
    }
}
