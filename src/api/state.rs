//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::{ConfigLoader, LocaleConfig};

/// Shared application state.
///
/// Holds the loaded configuration. Reports are computed per request from the
/// punches in the request body, so nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Today's date in the configured time zone.
    pub fn today(&self) -> NaiveDate {
        self.config.server().today()
    }

    /// Returns the export texts.
    pub fn locale(&self) -> &LocaleConfig {
        self.config.locale()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
