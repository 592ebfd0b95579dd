//! Configuration loading and management for the attendance engine.
//!
//! This module loads the server settings (bind address and time zone) and
//! the locale texts used by the
//! CSV exports from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Enter label: {}", config.locale().status_labels.enter);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, HOST_ENV, PORT_ENV, TIMEZONE_ENV};
pub use types::{
    AppConfig, DEFAULT_TIMEZONE, DailyHeaders, FilenamePrefixes, LocaleConfig, PairHeaders,
    PunchHeaders, ServerConfig, StatusLabels,
};
