//! Data models for rental requests, quotes and reservations.
//!
//! This module contains the domain types shared by the pricing engine, the
//! booking wizard and the reservation lifecycle. Display implementations for
//! these models live in [`crate::display::models`] so that data and
//! presentation stay apart.
//!
//! # Overview
//!
//! - [`RentalRequest`]: the customer's draft, edited step by step
//! - [`PriceBreakdown`]: the itemized quote for a draft
//! - [`Reservation`]: a submitted draft with its frozen price, a lifecycle
//!   [`ReservationStatus`] and an independent fulfillment `progress`
//!
//! # Examples
//!
//! ```rust
//! use rentwise_core::models::{AddOn, InsuranceTier, RentalRequest, Vehicle};
//!
//! let vehicle = Vehicle {
//!     id: "suv-7".to_string(),
//!     name: "Compact SUV".to_string(),
//!     vehicle_type: "suv".to_string(),
//!     daily_rate: 120.0,
//!     attributes: vec![],
//! };
//!
//! let mut request = RentalRequest::for_vehicle(&vehicle);
//! request.insurance_tier = InsuranceTier::Standard;
//! request.add_ons.insert(AddOn::GpsUnit);
//! assert_eq!(request.daily_rate, 120.0);
//! ```

pub mod filters;
pub mod options;
pub mod quote;
pub mod request;
pub mod requests;
pub mod reservation;
pub mod status;

#[cfg(test)]
mod tests;

pub use filters::ReservationFilter;
pub use options::{AddOn, InsuranceTier, PaymentMethod};
pub use quote::{AddOnCharge, PriceBreakdown};
pub use request::{Field, RentalRequest, Vehicle, DEFAULT_LOCATION};
pub use requests::{ProgressUpdate, StatusChange, MAX_PROGRESS};
pub use reservation::Reservation;
pub use status::ReservationStatus;
