//! Parameter structures for reservation operations
//!
//! Shared request shapes used by every interface (CLI, MCP) so that each one
//! converts its own argument types into the same core structures before
//! calling the [`ReservationManager`](crate::ReservationManager) handlers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these types to add framework derives:
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct StatusArgs {
//!     pub id: u64,
//!     pub status: StatusArg,
//! }
//!
//! impl From<StatusArgs> for SetStatus { /* ... */ }
//!
//! // In the MCP server
//! McpParams<SetStatus>
//! ```
//!
//! Free-text values (statuses) are parsed into domain enums by the validated
//! request types in [`crate::models::requests`], never here. Quote and create
//! requests take a [`RentalRequest`](crate::models::RentalRequest) directly.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The reservation ID
    pub id: u64,
}

/// Parameters for listing reservations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListReservations {
    /// Only show reservations in this status (pending, confirmed, cancelled,
    /// in_transit, completed)
    #[serde(default)]
    pub status: Option<String>,
}

/// Parameters for a lifecycle transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetStatus {
    /// The reservation ID
    pub id: u64,
    /// Target status; must be reachable from the current one
    pub status: String,
}

/// Parameters for a fulfillment progress update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetProgress {
    /// The reservation ID
    pub id: u64,
    /// Completion percentage between 0 and 100
    pub progress: i64,
}
