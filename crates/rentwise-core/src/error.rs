//! Error types for the rental engine.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Field, ReservationStatus};
use crate::wizard::WizardStep;

/// Comprehensive error type for all pricing, wizard and lifecycle operations.
#[derive(Error, Debug)]
pub enum RentalError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Reservation not found for the given ID
    #[error("Reservation with ID {id} not found")]
    ReservationNotFound { id: u64 },
    /// Lifecycle change not permitted from the reservation's current status
    #[error("Reservation {id} cannot move from '{from}' to '{to}'")]
    InvalidTransition {
        id: u64,
        from: ReservationStatus,
        to: ReservationStatus,
    },
    /// Operation reserved for administrators
    #[error("Operation '{operation}' requires administrator privileges")]
    Forbidden { operation: String },
    /// A wizard step is missing required fields
    #[error("Step '{step}' is incomplete, missing: {missing}")]
    IncompleteStep {
        step: WizardStep,
        missing: MissingFields,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The reservation store did not answer in time or is unreachable
    #[error("{dependency} unavailable: {reason}")]
    DependencyUnavailable { dependency: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Fields reported missing by a wizard step, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissingFields(pub Vec<Field>);

impl MissingFields {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> RentalError {
        RentalError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RentalError {
        RentalError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RentalError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for the store being slow or unreachable.
    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        Self::DependencyUnavailable {
            dependency: "reservation store".into(),
            reason: reason.into(),
        }
    }

    /// True when the caller should ask the user to correct a field.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::IncompleteStep { .. })
    }

    /// True when the same call may succeed later without any input change.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::DependencyUnavailable { .. } | Self::Database { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| match e.sqlite_error_code() {
            // Another connection held the lock for the whole wait
            Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked) => {
                RentalError::store_unavailable(format!("{message}: {e}"))
            }
            _ => RentalError::database(message).with_source(e),
        })
    }
}

/// Result type alias for rental operations
pub type Result<T> = std::result::Result<T, RentalError>;
