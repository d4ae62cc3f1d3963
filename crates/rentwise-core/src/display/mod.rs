//! Display formatting for reservations, quotes and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]), producing
//! markdown that the CLI renders in the terminal and the MCP server returns
//! as text. Collections and operation outcomes get newtype wrappers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Formatted     │
//! │  (Reservation,  │───▶│ (Reservations,  │───▶│    Output       │
//! │  PriceBreakdown)│    │  CreateResult)  │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Reservations`] list wrapper
//! - [`results`]: [`CreateResult`] and [`UpdateResult`]
//! - [`format`]: [`Money`] and [`LocalDateTime`] value formatters
//! - [`models`]: Display implementations for domain models
//!
//! ## Examples
//!
//! ```rust
//! use rentwise_core::{config::PricingConfig, models::RentalRequest, pricing};
//!
//! let mut request = RentalRequest::default();
//! request.daily_rate = 100.0;
//! request.pickup_date = "2024-03-10".into();
//! request.return_date = "2024-03-10".into();
//!
//! let quote = pricing::quote(&request, &PricingConfig::default())?;
//! let output = quote.to_string();
//! assert!(output.contains("- **Total**: 135.70"));
//! # Ok::<(), rentwise_core::RentalError>(())
//! ```

pub mod collections;
pub mod format;
pub mod models;
pub mod results;

pub use collections::Reservations;
pub use format::{LocalDateTime, Money};
pub use results::{CreateResult, UpdateResult};
