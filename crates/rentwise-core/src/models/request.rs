//! Booking draft and catalog vehicle records.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AddOn, InsuranceTier, PaymentMethod};

/// Location used when the customer does not pick one.
pub const DEFAULT_LOCATION: &str = "Main branch";

/// A vehicle record supplied by the catalog. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    /// Body type as listed in the catalog (suv, sedan, van, ...)
    pub vehicle_type: String,
    pub daily_rate: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

/// In-progress, unsubmitted booking draft.
///
/// Date and time fields hold raw user input; they are parsed when a quote is
/// computed so that a half-filled draft can still be held and edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct RentalRequest {
    /// Catalog identifier of the selected vehicle
    pub vehicle_id: String,

    /// Daily rate copied from the catalog when the vehicle was selected
    pub daily_rate: f64,

    /// Pickup date, `YYYY-MM-DD`
    pub pickup_date: String,

    /// Pickup time, `HH:MM`
    pub pickup_time: String,

    /// Return date, `YYYY-MM-DD`
    pub return_date: String,

    /// Return time, `HH:MM`
    pub return_time: String,

    pub pickup_location: String,

    pub return_location: String,

    pub insurance_tier: InsuranceTier,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub add_ons: BTreeSet<AddOn>,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone: String,

    pub payment_method: PaymentMethod,
}

impl Default for RentalRequest {
    fn default() -> Self {
        Self {
            vehicle_id: String::new(),
            daily_rate: 0.0,
            pickup_date: String::new(),
            pickup_time: String::new(),
            return_date: String::new(),
            return_time: String::new(),
            pickup_location: DEFAULT_LOCATION.to_string(),
            return_location: DEFAULT_LOCATION.to_string(),
            insurance_tier: InsuranceTier::default(),
            add_ons: BTreeSet::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            payment_method: PaymentMethod::default(),
        }
    }
}

impl RentalRequest {
    /// Starts a draft for the given vehicle, freezing its current daily rate.
    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        let mut request = Self::default();
        request.select_vehicle(vehicle);
        request
    }

    /// Switches the draft to another vehicle. The rate is copied, not linked,
    /// so later catalog price changes leave the draft untouched.
    pub fn select_vehicle(&mut self, vehicle: &Vehicle) {
        self.vehicle_id = vehicle.id.clone();
        self.daily_rate = vehicle.daily_rate;
    }

    /// Raw text of a free-text field, `None` for structured fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::VehicleId => &self.vehicle_id,
            Field::PickupDate => &self.pickup_date,
            Field::PickupTime => &self.pickup_time,
            Field::ReturnDate => &self.return_date,
            Field::ReturnTime => &self.return_time,
            Field::PickupLocation => &self.pickup_location,
            Field::ReturnLocation => &self.return_location,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::DailyRate | Field::InsuranceTier | Field::AddOns | Field::PaymentMethod => {
                return None
            }
        };
        Some(value.as_str())
    }

    /// Subset of `fields` whose text is empty or whitespace only.
    pub fn blank_fields(&self, fields: &[Field]) -> Vec<Field> {
        fields
            .iter()
            .copied()
            .filter(|field| {
                self.text(*field)
                    .is_some_and(|value| value.trim().is_empty())
            })
            .collect()
    }

    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Names of the draft's fields, used to point validation failures at input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    VehicleId,
    DailyRate,
    PickupDate,
    PickupTime,
    ReturnDate,
    ReturnTime,
    PickupLocation,
    ReturnLocation,
    InsuranceTier,
    AddOns,
    FirstName,
    LastName,
    Email,
    Phone,
    PaymentMethod,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::VehicleId => "vehicle_id",
            Field::DailyRate => "daily_rate",
            Field::PickupDate => "pickup_date",
            Field::PickupTime => "pickup_time",
            Field::ReturnDate => "return_date",
            Field::ReturnTime => "return_time",
            Field::PickupLocation => "pickup_location",
            Field::ReturnLocation => "return_location",
            Field::InsuranceTier => "insurance_tier",
            Field::AddOns => "add_ons",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::PaymentMethod => "payment_method",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
