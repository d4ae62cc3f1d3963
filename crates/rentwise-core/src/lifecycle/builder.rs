//! Builder for creating and configuring ReservationManager instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use super::ReservationManager;
use crate::{
    config::PricingConfig,
    error::{RentalError, Result},
    notify::{LogNotifier, NotificationSink},
    store::{ReservationStore, SqliteStore},
};

/// Default bound on a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound on a single notification delivery.
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Builder for creating and configuring ReservationManager instances.
pub struct ReservationManagerBuilder {
    database_path: Option<PathBuf>,
    pricing_path: Option<PathBuf>,
    pricing: Option<PricingConfig>,
    store: Option<Arc<dyn ReservationStore>>,
    notifier: Option<Arc<dyn NotificationSink>>,
    store_timeout: Duration,
    notification_timeout: Duration,
}

impl ReservationManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            pricing_path: None,
            pricing: None,
            store: None,
            notifier: None,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/rentwise/rentwise.db` or
    /// `~/.local/share/rentwise/rentwise.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the rate card from a JSON file at build time.
    pub fn with_pricing_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.pricing_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an in-memory rate card. Takes precedence over a pricing file.
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = Some(pricing);
        self
    }

    /// Uses the given store instead of opening SQLite.
    pub fn with_store(mut self, store: Arc<dyn ReservationStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replaces the default [`LogNotifier`].
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn with_notification_timeout(mut self, timeout: Duration) -> Self {
        self.notification_timeout = timeout;
        self
    }

    /// Builds the configured manager.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::FileSystem` if the database or pricing path is
    /// unusable
    /// Returns `RentalError::Database` if database initialization fails
    /// Returns `RentalError::Configuration` if the rate card is invalid
    pub async fn build(self) -> Result<ReservationManager> {
        let pricing = match (self.pricing, self.pricing_path) {
            (Some(pricing), _) => {
                pricing.validate()?;
                pricing
            }
            (None, Some(path)) => PricingConfig::from_path(&path)?,
            (None, None) => PricingConfig::default(),
        };

        let store: Arc<dyn ReservationStore> = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| RentalError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                debug!("Opening reservation database at {}", db_path.display());
                Arc::new(SqliteStore::open(&db_path).await?)
            }
        };

        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(LogNotifier) as Arc<dyn NotificationSink>);

        Ok(ReservationManager::new(
            store,
            notifier,
            pricing,
            self.store_timeout,
            self.notification_timeout,
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("rentwise")
            .place_data_file("rentwise.db")
            .map_err(|e| RentalError::XdgDirectory(e.to_string()))
    }
}

impl Default for ReservationManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
