//! Rentwise CLI Application
//!
//! Booking desk and reservation console for the Rentwise rental engine, plus
//! an MCP server exposing the same operations over stdio.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, RentwiseMcpServer};
use renderer::TerminalRenderer;
use rentwise_core::{params::ListReservations, ReservationManagerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        pricing_file,
        no_color,
        command,
    } = Args::parse();

    let manager = ReservationManagerBuilder::new()
        .with_database_path(database_file)
        .with_pricing_file(pricing_file)
        .build()
        .await
        .context("Failed to initialize reservation manager")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Rentwise started");

    match command {
        Some(Quote(args)) => Cli::new(manager, renderer).quote(&args.into()),
        Some(Reservation { command }) => {
            Cli::new(manager, renderer)
                .handle_reservation_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Rentwise MCP server");
            run_stdio_server(RentwiseMcpServer::new(manager))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(manager, renderer)
                .list_reservations(&ListReservations::default())
                .await
        }
    }
}
