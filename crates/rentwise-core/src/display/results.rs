//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Reservation;

/// Wrapper type for displaying the result of create operations.
///
/// Prints a confirmation line followed by the full created record.
#[derive(Debug)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Reservation> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created reservation with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of what changed.
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Reservation> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated reservation with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
