//! Ordered steps of the booking wizard.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Field;

/// One screen of the booking flow. Steps are strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Dates, times and locations
    Journey,
    /// Customer identity and contact details
    Profile,
    /// Insurance tier and add-ons
    Privileges,
    /// Payment method and final review
    Settlement,
}

const JOURNEY_FIELDS: &[Field] = &[
    Field::PickupDate,
    Field::PickupTime,
    Field::ReturnDate,
    Field::ReturnTime,
];

const PROFILE_FIELDS: &[Field] = &[Field::FirstName, Field::LastName, Field::Email, Field::Phone];

impl WizardStep {
    /// All steps in the order the customer visits them.
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Journey,
        WizardStep::Profile,
        WizardStep::Privileges,
        WizardStep::Settlement,
    ];

    pub const FIRST: WizardStep = WizardStep::Journey;

    pub const LAST: WizardStep = WizardStep::Settlement;

    /// Zero-based position in [`WizardStep::ALL`].
    pub fn index(self) -> usize {
        match self {
            WizardStep::Journey => 0,
            WizardStep::Profile => 1,
            WizardStep::Privileges => 2,
            WizardStep::Settlement => 3,
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<WizardStep> {
        self.index()
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Fields that must be non-blank before leaving this step.
    ///
    /// Only presence is checked. Email and phone formats are not.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            WizardStep::Journey => JOURNEY_FIELDS,
            WizardStep::Profile => PROFILE_FIELDS,
            WizardStep::Privileges | WizardStep::Settlement => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Journey => "journey",
            WizardStep::Profile => "profile",
            WizardStep::Privileges => "privileges",
            WizardStep::Settlement => "settlement",
        }
    }

    /// Heading shown above the step's form.
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Journey => "Journey details",
            WizardStep::Profile => "Your details",
            WizardStep::Privileges => "Insurance and extras",
            WizardStep::Settlement => "Payment and review",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
