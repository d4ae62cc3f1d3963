//! Itemized price of a rental request.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AddOn, InsuranceTier};

/// Charge for one selected add-on over the whole rental.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddOnCharge {
    pub add_on: AddOn,
    pub daily_price: f64,
    pub subtotal: f64,
}

/// Result of quoting a [`RentalRequest`](super::RentalRequest).
///
/// Amounts are unrounded; round only when presenting them (see
/// [`crate::display::Money`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PriceBreakdown {
    /// Billable days, never less than one
    pub days: u32,
    pub daily_rate: f64,
    pub vehicle_subtotal: f64,
    pub insurance_tier: InsuranceTier,
    pub insurance_daily: f64,
    pub insurance_subtotal: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<AddOnCharge>,
    pub add_ons_subtotal: f64,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}
