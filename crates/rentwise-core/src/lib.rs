//! Core library for the Rentwise vehicle rental engine.
//!
//! This crate holds the rules of a rental booking: how a proposed rental is
//! priced, how the multi-step booking wizard gates progression, and which
//! lifecycle transitions a submitted reservation may go through and who may
//! trigger them.
//!
//! - [`pricing`]: pure quote computation over a [`config::PricingConfig`]
//! - [`wizard`]: the [`BookingWizard`] draft controller
//! - [`lifecycle`]: the [`ReservationManager`] state machine
//! - [`store`]: the [`store::ReservationStore`] seam with SQLite and
//!   in-memory implementations
//! - [`notify`]: best-effort customer notifications
//! - [`display`]: markdown formatting shared by the CLI and MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use rentwise_core::{models::Vehicle, ReservationManagerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ReservationManagerBuilder::new()
//!     .with_database_path(Some("rentals.db"))
//!     .build()
//!     .await?;
//!
//! let vehicle = Vehicle {
//!     id: "suv-7".to_string(),
//!     name: "Compact SUV".to_string(),
//!     vehicle_type: "suv".to_string(),
//!     daily_rate: 120.0,
//!     attributes: vec![],
//! };
//!
//! let mut wizard = manager.start_booking();
//! wizard.select_vehicle(&vehicle);
//! {
//!     let draft = wizard.draft_mut();
//!     draft.pickup_date = "2024-06-01".into();
//!     draft.pickup_time = "10:00".into();
//!     draft.return_date = "2024-06-04".into();
//!     draft.return_time = "10:00".into();
//! }
//! wizard.advance()?;
//! println!("Current quote:\n{}", wizard.quote()?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod notify;
pub mod params;
pub mod pricing;
pub mod store;
pub mod wizard;

// Re-export commonly used types
pub use config::PricingConfig;
pub use db::Database;
pub use display::{CreateResult, LocalDateTime, Money, Reservations, UpdateResult};
pub use error::{RentalError, Result};
pub use lifecycle::{Actor, ReservationManager, ReservationManagerBuilder};
pub use models::{
    AddOn, Field, InsuranceTier, PaymentMethod, PriceBreakdown, RentalRequest, Reservation,
    ReservationFilter, ReservationStatus, Vehicle,
};
pub use notify::{LogNotifier, Notification, NotificationSink};
pub use params::{Id, ListReservations, SetProgress, SetStatus};
pub use wizard::{BookingWizard, WizardStep};
