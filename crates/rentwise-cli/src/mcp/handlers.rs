//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rentwise_core::{params as core, Actor, RentalRequest, ReservationManager};
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// `#[serde(transparent)]` passes JSON straight through to the wrapped core
/// type, and the schema is the wrapped type's own, so the core crate only
/// needs its optional `schema` feature and no MCP-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    fn into_inner(self) -> T {
        self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type Booking = McpParams<RentalRequest>;
pub type ListReservations = McpParams<core::ListReservations>;
pub type SetStatus = McpParams<core::SetStatus>;
pub type SetProgress = McpParams<core::SetProgress>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
///
/// Lifecycle changes arrive from the operator's assistant and run as
/// [`Actor::Administrator`].
pub struct McpHandlers {
    manager: Arc<ReservationManager>,
}

impl McpHandlers {
    pub fn new(manager: Arc<ReservationManager>) -> Self {
        Self { manager }
    }

    pub fn quote(&self, params: &Booking) -> McpResult {
        debug!("quote: {params:?}");

        let breakdown = self
            .manager
            .quote(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to compute quote", &e))?;
        text_result(format!("# Quote\n\n{breakdown}"))
    }

    pub async fn create_reservation(&self, params: &Booking) -> McpResult {
        debug!("create_reservation: {params:?}");

        let created = self
            .manager
            .submit_request(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create reservation", &e))?;
        text_result(created.to_string())
    }

    pub async fn show_reservation(&self, params: &Id) -> McpResult {
        debug!("show_reservation: {params:?}");

        let reservation = self
            .manager
            .show_reservation(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show reservation", &e))?;
        text_result(reservation.to_string())
    }

    pub async fn list_reservations(&self, params: &ListReservations) -> McpResult {
        debug!("list_reservations: {params:?}");

        let reservations = self
            .manager
            .list_reservations(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list reservations", &e))?;

        let title = match &params.as_ref().status {
            Some(status) => format!("Reservations ({status})"),
            None => "Reservations".to_string(),
        };
        text_result(format!("# {title}\n\n{reservations}"))
    }

    pub async fn set_reservation_status(&self, params: SetStatus) -> McpResult {
        debug!("set_reservation_status: {params:?}");

        let updated = self
            .manager
            .change_status(Actor::Administrator, params.into_inner())
            .await
            .map_err(|e| to_mcp_error("Failed to change reservation status", &e))?;
        text_result(updated.to_string())
    }

    pub async fn set_reservation_progress(&self, params: SetProgress) -> McpResult {
        debug!("set_reservation_progress: {params:?}");

        let updated = self
            .manager
            .change_progress(Actor::Administrator, params.into_inner())
            .await
            .map_err(|e| to_mcp_error("Failed to set reservation progress", &e))?;
        text_result(updated.to_string())
    }
}

