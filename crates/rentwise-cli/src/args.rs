use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{QuoteArgs, ReservationCommands};

/// Booking desk and reservation console for Rentwise
///
/// Quotes rentals, books them through the step-by-step booking wizard and
/// administers the resulting reservations. `rw serve` exposes the same
/// operations as an MCP (Model Context Protocol) server on stdio.
#[derive(Parser)]
#[command(version, about, name = "rw")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/rentwise/rentwise.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON rate card overriding insurance, add-on and tax rates
    #[arg(long, global = true)]
    pub pricing_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Rentwise CLI
///
/// - `quote`: price a rental without booking it
/// - `reservation`: create, inspect and administer reservations
/// - `serve`: start the MCP server
#[derive(Subcommand)]
pub enum Commands {
    /// Price a rental without booking it
    #[command(alias = "q")]
    Quote(QuoteArgs),
    /// Manage reservations
    #[command(alias = "r")]
    Reservation {
        #[command(subcommand)]
        command: ReservationCommands,
    },
    /// Start the MCP server
    Serve,
}
