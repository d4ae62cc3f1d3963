//! Database operations and SQLite management for reservations.
//!
//! This module provides the synchronous, low-level storage layer behind
//! [`crate::store::SqliteStore`]. It handles SQLite connections, schema
//! management and the reservation queries, including the compare-and-set
//! used to serialize lifecycle transitions.

use std::path::Path;
use std::time::{Duration, Instant};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, RentalError, Result};

pub mod reservation_queries;
pub mod schema;

/// How long a connection waits on a locked database before giving up.
/// Kept below the manager's default store timeout.
const BUSY_TIMEOUT: Duration = Duration::from_secs(4);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
    /// Writes on this connection must commit before this instant or not at all.
    deadline: Option<Instant>,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path.as_ref(), None)
    }

    /// Opens a connection for writes that must not commit after `deadline`.
    ///
    /// Lock waits are capped by the time left, and every write re-checks the
    /// deadline right before committing. A write that runs late is rolled
    /// back and reported as `RentalError::DependencyUnavailable`.
    pub fn with_deadline<P: AsRef<Path>>(path: P, deadline: Instant) -> Result<Self> {
        check_deadline(Some(deadline), "open")?;
        Self::open(path.as_ref(), Some(deadline))
    }

    fn open(path: &Path, deadline: Option<Instant>) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(lock_wait(deadline))
            .db_context("Failed to set busy timeout")?;

        let db = Self {
            connection,
            deadline,
        };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Time a blocked statement may wait for a lock.
fn lock_wait(deadline: Option<Instant>) -> Duration {
    deadline.map_or(BUSY_TIMEOUT, |deadline| {
        deadline
            .saturating_duration_since(Instant::now())
            .min(BUSY_TIMEOUT)
    })
}

/// Fails once `deadline` has passed.
fn check_deadline(deadline: Option<Instant>, operation: &str) -> Result<()> {
    match deadline {
        Some(deadline) if Instant::now() >= deadline => Err(RentalError::store_unavailable(
            format!("'{operation}' reached its deadline and was rolled back"),
        )),
        _ => Ok(()),
    }
}

/// Commits `tx` if the deadline still allows it. The commit itself may only
/// wait on locks for the time that is left.
fn commit_before(
    tx: rusqlite::Transaction<'_>,
    deadline: Option<Instant>,
    operation: &str,
) -> Result<()> {
    check_deadline(deadline, operation)?;
    tx.busy_timeout(lock_wait(deadline))
        .db_context("Failed to set busy timeout")?;
    tx.commit().db_context("Failed to commit transaction")
}
