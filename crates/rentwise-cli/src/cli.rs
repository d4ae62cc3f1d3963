//! Command-line argument structures and command handlers
//!
//! Arguments are declared with clap derives and converted into the core
//! request types (`RentalRequest`, `SetStatus`, ...) through explicit `From`
//! implementations, so the core crate stays free of clap attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ReservationManager
//! ```
//!
//! Booking from the command line drives the same [`BookingWizard`] the
//! interactive flows use: every step is validated in order and the first
//! incomplete one is reported with its blank fields.

use std::fmt;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use rentwise_core::{
    params::{Id, ListReservations, SetProgress, SetStatus},
    Actor, AddOn, CreateResult, InsuranceTier, PaymentMethod, RentalRequest, ReservationManager,
    ReservationStatus, WizardStep,
};

use crate::renderer::TerminalRenderer;

/// Trip details shared by quoting and booking
#[derive(Args)]
pub struct TripArgs {
    /// Daily rate of the vehicle
    #[arg(long)]
    pub daily_rate: f64,

    /// Pickup date (YYYY-MM-DD)
    #[arg(long)]
    pub pickup_date: Option<String>,

    /// Return date (YYYY-MM-DD)
    #[arg(long)]
    pub return_date: Option<String>,

    /// Insurance tier
    #[arg(long, value_enum, default_value_t = InsuranceArg::Essential)]
    pub insurance: InsuranceArg,

    /// Optional extras, comma separated
    #[arg(long = "add-on", value_enum, value_delimiter = ',')]
    pub add_ons: Vec<AddOnArg>,
}

impl TripArgs {
    fn apply(self, request: &mut RentalRequest) {
        request.daily_rate = self.daily_rate;
        request.pickup_date = self.pickup_date.unwrap_or_default();
        request.return_date = self.return_date.unwrap_or_default();
        request.insurance_tier = self.insurance.into();
        request.add_ons = self.add_ons.into_iter().map(AddOn::from).collect();
    }
}

/// Price a rental without booking it
///
/// Shows the itemized breakdown (vehicle, insurance, add-ons, tax) for the
/// given dates. Nothing is stored.
#[derive(Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub trip: TripArgs,
}

impl From<QuoteArgs> for RentalRequest {
    fn from(val: QuoteArgs) -> Self {
        let mut request = RentalRequest::default();
        val.trip.apply(&mut request);
        request
    }
}

/// Book a vehicle
///
/// Runs the booking wizard over the given details. Every step must be
/// complete: journey (dates and times), profile (name, email, phone),
/// privileges (insurance, add-ons) and settlement (payment method).
#[derive(Args)]
pub struct CreateReservationArgs {
    /// Catalog identifier of the vehicle
    #[arg(long)]
    pub vehicle_id: Option<String>,

    #[command(flatten)]
    pub trip: TripArgs,

    /// Pickup time (HH:MM)
    #[arg(long)]
    pub pickup_time: Option<String>,

    /// Return time (HH:MM)
    #[arg(long)]
    pub return_time: Option<String>,

    /// Pickup location
    #[arg(long)]
    pub pickup_location: Option<String>,

    /// Return location
    #[arg(long)]
    pub return_location: Option<String>,

    /// Customer first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Customer last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Customer email address
    #[arg(long)]
    pub email: Option<String>,

    /// Customer phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// How the customer will pay
    #[arg(long, value_enum, default_value_t = PaymentArg::Card)]
    pub payment: PaymentArg,
}

impl From<CreateReservationArgs> for RentalRequest {
    fn from(val: CreateReservationArgs) -> Self {
        let mut request = RentalRequest::default();
        val.trip.apply(&mut request);

        request.vehicle_id = val.vehicle_id.unwrap_or_default();
        request.pickup_time = val.pickup_time.unwrap_or_default();
        request.return_time = val.return_time.unwrap_or_default();
        if let Some(location) = val.pickup_location {
            request.pickup_location = location;
        }
        if let Some(location) = val.return_location {
            request.return_location = location;
        }
        request.first_name = val.first_name.unwrap_or_default();
        request.last_name = val.last_name.unwrap_or_default();
        request.email = val.email.unwrap_or_default();
        request.phone = val.phone.unwrap_or_default();
        request.payment_method = val.payment.into();
        request
    }
}

/// Show a reservation with its price breakdown
#[derive(Args)]
pub struct ShowReservationArgs {
    /// ID of the reservation to display
    pub id: u64,
}

impl From<ShowReservationArgs> for Id {
    fn from(val: ShowReservationArgs) -> Self {
        Id { id: val.id }
    }
}

/// List reservations, newest first
#[derive(Args)]
pub struct ListReservationsArgs {
    /// Only show reservations in this status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

impl From<ListReservationsArgs> for ListReservations {
    fn from(val: ListReservationsArgs) -> Self {
        ListReservations {
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Move a reservation through its lifecycle (administrator)
///
/// Allowed moves: pending → confirmed or cancelled, confirmed → in-transit or
/// cancelled, in-transit → completed.
#[derive(Args)]
pub struct StatusArgs {
    /// ID of the reservation
    pub id: u64,

    /// Target status
    #[arg(value_enum)]
    pub status: StatusArg,
}

impl From<StatusArgs> for SetStatus {
    fn from(val: StatusArgs) -> Self {
        SetStatus {
            id: val.id,
            status: val.status.to_string(),
        }
    }
}

/// Record fulfillment progress (administrator)
#[derive(Args)]
pub struct ProgressArgs {
    /// ID of the reservation
    pub id: u64,

    /// Completion percentage, 0 to 100
    #[arg(allow_negative_numbers = true)]
    pub percent: i64,
}

impl From<ProgressArgs> for SetProgress {
    fn from(val: ProgressArgs) -> Self {
        SetProgress {
            id: val.id,
            progress: val.percent,
        }
    }
}

/// Reservation management commands
#[derive(Subcommand)]
pub enum ReservationCommands {
    /// Book a vehicle through the booking wizard
    #[command(alias = "c")]
    Create(CreateReservationArgs),
    /// Show a reservation
    #[command(alias = "s")]
    Show(ShowReservationArgs),
    /// List reservations
    #[command(alias = "ls")]
    List(ListReservationsArgs),
    /// Change the lifecycle status of a reservation
    #[command(alias = "st")]
    Status(StatusArgs),
    /// Set the fulfillment progress of a reservation
    #[command(alias = "p")]
    Progress(ProgressArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum InsuranceArg {
    Essential,
    /// Also accepted as "prestige"
    #[value(alias = "prestige")]
    Standard,
    Elite,
}

impl From<InsuranceArg> for InsuranceTier {
    fn from(val: InsuranceArg) -> Self {
        match val {
            InsuranceArg::Essential => InsuranceTier::Essential,
            InsuranceArg::Standard => InsuranceTier::Standard,
            InsuranceArg::Elite => InsuranceTier::Elite,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AddOnArg {
    #[value(alias = "gps")]
    GpsUnit,
    ChildSeat,
    SecondDriver,
}

impl From<AddOnArg> for AddOn {
    fn from(val: AddOnArg) -> Self {
        match val {
            AddOnArg::GpsUnit => AddOn::GpsUnit,
            AddOnArg::ChildSeat => AddOn::ChildSeat,
            AddOnArg::SecondDriver => AddOn::SecondDriver,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PaymentArg {
    Card,
    Cash,
}

impl From<PaymentArg> for PaymentMethod {
    fn from(val: PaymentArg) -> Self {
        match val {
            PaymentArg::Card => PaymentMethod::Card,
            PaymentArg::Cash => PaymentMethod::Cash,
        }
    }
}

/// Command-line representation of reservation statuses
///
/// Displays as the core status string so it can be handed to the core
/// parameter types unchanged.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pending,
    Confirmed,
    Cancelled,
    InTransit,
    Completed,
}

impl From<StatusArg> for ReservationStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Pending => ReservationStatus::Pending,
            StatusArg::Confirmed => ReservationStatus::Confirmed,
            StatusArg::Cancelled => ReservationStatus::Cancelled,
            StatusArg::InTransit => ReservationStatus::InTransit,
            StatusArg::Completed => ReservationStatus::Completed,
        }
    }
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ReservationStatus::from(*self).as_str())
    }
}

/// Command handler tying parsed arguments to the reservation manager.
///
/// Status and progress changes run as [`Actor::Administrator`]: the console
/// is the operator's tool.
pub struct Cli {
    manager: ReservationManager,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(manager: ReservationManager, renderer: TerminalRenderer) -> Self {
        Self { manager, renderer }
    }

    pub async fn handle_reservation_command(&self, command: ReservationCommands) -> Result<()> {
        match command {
            ReservationCommands::Create(args) => self.create_reservation(args.into()).await,
            ReservationCommands::Show(args) => self.show_reservation(&args.into()).await,
            ReservationCommands::List(args) => self.list_reservations(&args.into()).await,
            ReservationCommands::Status(args) => self.set_status(args.into()).await,
            ReservationCommands::Progress(args) => self.set_progress(args.into()).await,
        }
    }

    pub fn quote(&self, request: &RentalRequest) -> Result<()> {
        let breakdown = self
            .manager
            .quote(request)
            .context("Failed to compute quote")?;
        self.renderer.render(&format!("# Quote\n\n{breakdown}"));
        Ok(())
    }

    async fn create_reservation(&self, draft: RentalRequest) -> Result<()> {
        let mut wizard = self.manager.start_booking().with_draft(draft);

        while wizard.current_step() != WizardStep::LAST {
            let step = wizard.current_step();
            wizard
                .advance()
                .with_context(|| format!("Booking stopped at the {step} step"))?;
            if let Ok(quote) = wizard.quote() {
                debug!("Running total after {step}: {:.2}", quote.total);
            }
        }

        let reservation = wizard
            .submit(&self.manager)
            .await
            .context("Failed to create reservation")?;
        self.renderer
            .render(&CreateResult::new(reservation).to_string());
        Ok(())
    }

    async fn show_reservation(&self, params: &Id) -> Result<()> {
        let reservation = self
            .manager
            .show_reservation(params)
            .await
            .with_context(|| format!("Failed to load reservation {}", params.id))?;
        self.renderer.render(&reservation.to_string());
        Ok(())
    }

    pub async fn list_reservations(&self, params: &ListReservations) -> Result<()> {
        let reservations = self
            .manager
            .list_reservations(params)
            .await
            .context("Failed to list reservations")?;
        self.renderer.render(&reservations.to_string());
        Ok(())
    }

    async fn set_status(&self, params: SetStatus) -> Result<()> {
        let id = params.id;
        let result = self
            .manager
            .change_status(Actor::Administrator, params)
            .await
            .with_context(|| format!("Failed to change status of reservation {id}"))?;
        self.renderer.render(&result.to_string());
        Ok(())
    }

    async fn set_progress(&self, params: SetProgress) -> Result<()> {
        let id = params.id;
        let result = self
            .manager
            .change_progress(Actor::Administrator, params)
            .await
            .with_context(|| format!("Failed to set progress of reservation {id}"))?;
        self.renderer.render(&result.to_string());
        Ok(())
    }
}
