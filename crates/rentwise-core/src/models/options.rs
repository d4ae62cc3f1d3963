//! Insurance tiers, add-ons and payment methods offered during booking.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Insurance coverage level, each billed at a fixed daily surcharge.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum InsuranceTier {
    /// Basic third-party coverage
    #[default]
    Essential,

    /// Mid-range coverage, marketed as "prestige"
    #[serde(alias = "prestige")]
    Standard,

    /// Full coverage with zero deductible
    Elite,
}

impl FromStr for InsuranceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "essential" => Ok(InsuranceTier::Essential),
            "standard" | "prestige" => Ok(InsuranceTier::Standard),
            "elite" => Ok(InsuranceTier::Elite),
            _ => Err(format!("Invalid insurance tier: {s}")),
        }
    }
}

impl InsuranceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceTier::Essential => "essential",
            InsuranceTier::Standard => "standard",
            InsuranceTier::Elite => "elite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceTier::Essential => "Essential",
            InsuranceTier::Standard => "Standard",
            InsuranceTier::Elite => "Elite",
        }
    }
}

/// Optional extra billed per rental day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    /// Satellite navigation unit
    #[serde(alias = "gps")]
    GpsUnit,

    /// Child safety seat
    ChildSeat,

    /// Additional authorized driver
    SecondDriver,
}

impl FromStr for AddOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "gps" | "gps_unit" | "gpsunit" => Ok(AddOn::GpsUnit),
            "child_seat" | "childseat" => Ok(AddOn::ChildSeat),
            "second_driver" | "seconddriver" => Ok(AddOn::SecondDriver),
            _ => Err(format!("Invalid add-on: {s}")),
        }
    }
}

impl AddOn {
    pub const ALL: [AddOn; 3] = [AddOn::GpsUnit, AddOn::ChildSeat, AddOn::SecondDriver];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddOn::GpsUnit => "gps_unit",
            AddOn::ChildSeat => "child_seat",
            AddOn::SecondDriver => "second_driver",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddOn::GpsUnit => "GPS unit",
            AddOn::ChildSeat => "Child seat",
            AddOn::SecondDriver => "Second driver",
        }
    }
}

/// How the customer intends to settle. Payment itself is acknowledged, not
/// processed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(format!("Invalid payment method: {s}")),
        }
    }
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
        }
    }
}
