//! Multi-step booking wizard.
//!
//! [`BookingWizard`] holds one mutable [`RentalRequest`] draft and the step
//! the customer is on. It moves forward only when the current step's
//! required fields are filled, moves back freely, and hands the finished
//! draft to the [`ReservationManager`] on submission.
//!
//! ```text
//! Journey ──▶ Profile ──▶ Privileges ──▶ Settlement ──submit──▶ Reservation
//!    ◀──────────◀─────────────◀ (retreat, never validated)
//! ```
//!
//! Validation failures are ordinary `Err` values carrying the missing
//! fields so an interface can highlight them. They never change the
//! wizard's state.
//!
//! # Examples
//!
//! ```rust
//! use rentwise_core::{config::PricingConfig, wizard::{BookingWizard, WizardStep}};
//!
//! let mut wizard = BookingWizard::new(PricingConfig::default());
//! assert!(wizard.advance().is_err());
//! assert_eq!(wizard.current_step(), WizardStep::Journey);
//!
//! let draft = wizard.draft_mut();
//! draft.pickup_date = "2024-06-01".into();
//! draft.pickup_time = "10:00".into();
//! draft.return_date = "2024-06-04".into();
//! draft.return_time = "10:00".into();
//!
//! assert_eq!(wizard.advance()?, WizardStep::Profile);
//! # Ok::<(), rentwise_core::RentalError>(())
//! ```

use log::debug;

use crate::{
    config::PricingConfig,
    error::{MissingFields, RentalError, Result},
    lifecycle::ReservationManager,
    models::{Field, PriceBreakdown, RentalRequest, Reservation, Vehicle},
    pricing,
};

pub mod steps;


pub use steps::WizardStep;

/// In-memory controller for one customer's booking.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    draft: RentalRequest,
    step: WizardStep,
    pricing: PricingConfig,
    submitted: Option<u64>,
}

impl BookingWizard {
    /// Starts at the first step with an empty draft.
    pub fn new(pricing: PricingConfig) -> Self {
        Self {
            draft: RentalRequest::default(),
            step: WizardStep::FIRST,
            pricing,
            submitted: None,
        }
    }

    /// Replaces the draft, keeping the current step.
    pub fn with_draft(mut self, draft: RentalRequest) -> Self {
        self.draft = draft;
        self
    }

    pub fn draft(&self) -> &RentalRequest {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RentalRequest {
        &mut self.draft
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// ID of the reservation created by a successful [`submit`](Self::submit).
    pub fn submitted_reservation(&self) -> Option<u64> {
        self.submitted
    }

    /// Selects a catalog vehicle, copying its current daily rate.
    pub fn select_vehicle(&mut self, vehicle: &Vehicle) {
        self.draft.select_vehicle(vehicle);
    }

    /// Required fields of `step` that are still blank.
    pub fn missing_fields(&self, step: WizardStep) -> MissingFields {
        MissingFields(self.draft.blank_fields(step.required_fields()))
    }

    pub fn validate_step(&self, step: WizardStep) -> bool {
        self.missing_fields(step).is_empty()
    }

    /// Moves to the next step if the current one is complete.
    ///
    /// # Errors
    ///
    /// - `RentalError::IncompleteStep` listing the blank fields; the wizard
    ///   stays where it is
    /// - `RentalError::InvalidInput` on field `step` when already on the last
    ///   step, which can only be left by submitting
    pub fn advance(&mut self) -> Result<WizardStep> {
        self.check_step(self.step)?;
        let next = self.step.next().ok_or_else(|| {
            RentalError::invalid_input("step")
                .with_reason("Already on the last step; submit the booking instead")
        })?;

        debug!("Wizard advanced from {} to {next}", self.step);
        self.step = next;
        Ok(next)
    }

    /// Moves to the previous step without validating anything.
    ///
    /// Returns `None` (and stays put) on the first step.
    pub fn retreat(&mut self) -> Option<WizardStep> {
        let previous = self.step.previous()?;
        debug!("Wizard moved back from {} to {previous}", self.step);
        self.step = previous;
        Some(previous)
    }

    /// Prices the current draft.
    pub fn quote(&self) -> Result<PriceBreakdown> {
        pricing::quote(&self.draft, &self.pricing)
    }

    /// Checks every step plus the vehicle selection, as done before
    /// submission.
    ///
    /// # Errors
    ///
    /// `RentalError::IncompleteStep` for the first step with blank fields, or
    /// `RentalError::InvalidInput` on `vehicle_id` when no vehicle is chosen
    /// and on `daily_rate` when the rate is not a positive amount.
    pub fn ensure_complete(&self) -> Result<()> {
        for step in WizardStep::ALL {
            self.check_step(step)?;
        }
        if self.draft.vehicle_id.trim().is_empty() {
            return Err(RentalError::invalid_input(Field::VehicleId.as_str())
                .with_reason("No vehicle selected"));
        }
        let rate = self.draft.daily_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RentalError::invalid_input(Field::DailyRate.as_str())
                .with_reason("No daily rate; select a vehicle from the catalog"));
        }
        Ok(())
    }

    /// Prices the finished draft and creates the reservation.
    ///
    /// Only reachable from the last step, and only once. On any failure the
    /// draft is kept as is so the customer can retry without re-entering it.
    ///
    /// # Errors
    ///
    /// - `RentalError::InvalidInput` on field `step` when not on the last
    ///   step or when this booking was already submitted
    /// - validation errors from [`ensure_complete`](Self::ensure_complete)
    ///   and the pricing engine
    /// - any error of [`ReservationManager::create`], typically
    ///   `DependencyUnavailable`
    pub async fn submit(&mut self, manager: &ReservationManager) -> Result<Reservation> {
        if let Some(id) = self.submitted {
            return Err(RentalError::invalid_input("step")
                .with_reason(format!("Booking was already submitted as reservation {id}")));
        }
        if self.step != WizardStep::LAST {
            return Err(RentalError::invalid_input("step").with_reason(format!(
                "Bookings can only be submitted from the {} step, currently on {}",
                WizardStep::LAST,
                self.step
            )));
        }

        self.ensure_complete()?;
        let quote = self.quote()?;
        let reservation = manager.create(&self.draft, &quote).await?;

        self.submitted = Some(reservation.id);
        Ok(reservation)
    }

    fn check_step(&self, step: WizardStep) -> Result<()> {
        let missing = self.missing_fields(step);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RentalError::IncompleteStep { step, missing })
        }
    }
}
