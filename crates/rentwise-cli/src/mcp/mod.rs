//! MCP server implementation for Rentwise
//!
//! Exposes quoting, booking and reservation administration as Model Context
//! Protocol tools so an assistant can work the booking desk.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rentwise_core::ReservationManager;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{Booking, Id, ListReservations, McpResult, SetProgress, SetStatus};

const INSTRUCTIONS: &str = r#"Rentwise prices vehicle rentals and manages the reservations they turn into.

## Core Concepts
- **Quote**: itemized price of a rental. Billable days are the calendar days between pickup and return date (minimum 1); vehicle, insurance and add-ons are charged per day, then tax is added.
- **Reservation**: a submitted booking with a frozen price, a lifecycle status and a fulfillment progress (0-100%).

## Lifecycle
pending → confirmed or cancelled; confirmed → in_transit or cancelled; in_transit → completed. Cancelled and completed are final.

## Workflow
1. `quote` to price a trip while the customer decides
2. `create_reservation` with every booking detail: vehicle_id, daily_rate, pickup/return date and time, first_name, last_name, email, phone
3. `set_reservation_status` to confirm, dispatch, complete or cancel
4. `set_reservation_progress` to record fulfillment progress
5. `list_reservations` and `show_reservation` to review"#;

/// MCP server for Rentwise
#[derive(Clone)]
pub struct RentwiseMcpServer {
    manager: Arc<ReservationManager>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RentwiseMcpServer {
    pub fn new(manager: ReservationManager) -> Self {
        Self {
            manager: Arc::new(manager),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.manager.clone())
    }

    #[tool(
        name = "quote",
        description = "Compute the itemized price of a rental without booking it. Requires daily_rate, pickup_date and return_date (YYYY-MM-DD); optional insurance_tier (essential, standard, elite) and add_ons (gps_unit, child_seat, second_driver). Returns vehicle, insurance, add-on, subtotal, tax and total lines."
    )]
    async fn quote(&self, Parameters(params): Parameters<Booking>) -> McpResult {
        self.handlers().quote(&params)
    }

    #[tool(
        name = "create_reservation",
        description = "Book a vehicle. Every booking step must be complete: pickup/return date and time, first_name, last_name, email and phone, plus the vehicle_id and its daily_rate. Optional pickup_location, return_location, insurance_tier, add_ons and payment_method (card or cash). The reservation starts as pending with 0% progress and the quoted price frozen."
    )]
    async fn create_reservation(&self, Parameters(params): Parameters<Booking>) -> McpResult {
        self.handlers().create_reservation(&params).await
    }

    #[tool(
        name = "show_reservation",
        description = "Show a reservation by ID: customer, vehicle, journey, options, status, progress and the frozen price breakdown."
    )]
    async fn show_reservation(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().show_reservation(&params).await
    }

    #[tool(
        name = "list_reservations",
        description = "List reservations, newest first. Optionally filter by status (pending, confirmed, cancelled, in_transit, completed)."
    )]
    async fn list_reservations(
        &self,
        Parameters(params): Parameters<ListReservations>,
    ) -> McpResult {
        self.handlers().list_reservations(&params).await
    }

    #[tool(
        name = "set_reservation_status",
        description = "Move a reservation through its lifecycle. Allowed: pending → confirmed or cancelled, confirmed → in_transit or cancelled, in_transit → completed. Any other move is rejected and the reservation is left unchanged."
    )]
    async fn set_reservation_status(
        &self,
        Parameters(params): Parameters<SetStatus>,
    ) -> McpResult {
        self.handlers().set_reservation_status(params).await
    }

    #[tool(
        name = "set_reservation_progress",
        description = "Record fulfillment progress of a reservation as a percentage between 0 and 100. Independent of the lifecycle status; values outside the range are rejected."
    )]
    async fn set_reservation_progress(
        &self,
        Parameters(params): Parameters<SetProgress>,
    ) -> McpResult {
        self.handlers().set_reservation_progress(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RentwiseMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "rentwise".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: RentwiseMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Rentwise MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
