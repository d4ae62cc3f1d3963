//! Pricing configuration.
//!
//! Tier and add-on surcharges and the tax rate are passed to the pricing
//! engine explicitly instead of being read from globals. The defaults match
//! the published rate card; a JSON file can override any subset of them:
//!
//! ```json
//! { "insurance": { "elite": 45.0 }, "tax_rate": 0.2 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{RentalError, Result},
    models::{AddOn, InsuranceTier},
};

/// Daily surcharge per insurance tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InsuranceRates {
    pub essential: f64,
    pub standard: f64,
    pub elite: f64,
}

impl Default for InsuranceRates {
    fn default() -> Self {
        Self {
            essential: 15.0,
            standard: 25.0,
            elite: 40.0,
        }
    }
}

/// Daily surcharge per add-on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddOnRates {
    pub gps_unit: f64,
    pub child_seat: f64,
    pub second_driver: f64,
}

impl Default for AddOnRates {
    fn default() -> Self {
        Self {
            gps_unit: 5.0,
            child_seat: 8.0,
            second_driver: 10.0,
        }
    }
}

/// Everything the pricing engine needs besides the request itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    pub insurance: InsuranceRates,
    pub add_ons: AddOnRates,
    /// Statutory tax applied to the subtotal, as a fraction
    pub tax_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            insurance: InsuranceRates::default(),
            add_ons: AddOnRates::default(),
            tax_rate: 0.18,
        }
    }
}

impl PricingConfig {
    /// Loads a JSON rate card, falling back to defaults for missing keys.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RentalError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects negative surcharges and tax rates outside `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("insurance.essential", self.insurance.essential),
            ("insurance.standard", self.insurance.standard),
            ("insurance.elite", self.insurance.elite),
            ("add_ons.gps_unit", self.add_ons.gps_unit),
            ("add_ons.child_seat", self.add_ons.child_seat),
            ("add_ons.second_driver", self.add_ons.second_driver),
        ];
        if let Some((name, rate)) = rates
            .iter()
            .find(|(_, rate)| !rate.is_finite() || *rate < 0.0)
        {
            return Err(RentalError::Configuration {
                message: format!("Rate '{name}' must be a non-negative number, got {rate}"),
            });
        }
        if !(0.0..1.0).contains(&self.tax_rate) {
            return Err(RentalError::Configuration {
                message: format!("Tax rate must be in [0, 1), got {}", self.tax_rate),
            });
        }
        Ok(())
    }

    pub fn insurance_daily(&self, tier: InsuranceTier) -> f64 {
        match tier {
            InsuranceTier::Essential => self.insurance.essential,
            InsuranceTier::Standard => self.insurance.standard,
            InsuranceTier::Elite => self.insurance.elite,
        }
    }

    pub fn add_on_daily(&self, add_on: AddOn) -> f64 {
        match add_on {
            AddOn::GpsUnit => self.add_ons.gps_unit,
            AddOn::ChildSeat => self.add_ons.child_seat,
            AddOn::SecondDriver => self.add_ons.second_driver,
        }
    }
}
