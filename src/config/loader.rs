//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, LocaleConfig, ServerConfig};

/// Environment variable overriding the bind host.
pub const HOST_ENV: &str = "HOST";

/// Environment variable overriding the bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the time zone.
pub const TIMEZONE_ENV: &str = "TIMEZONE";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── server.yaml   # host, port and time zone
/// └── locale.yaml   # CSV headers, status labels, file name prefixes
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Listening on {}", loader.server().address());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// `HOST`, `PORT` and `TIMEZONE` from the process environment take
    /// precedence over `server.yaml`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - `PORT` is set but is not a valid port number
    /// - `TIMEZONE` is set but is not an IANA zone name
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Loads configuration, reading overrides through `lookup`.
    pub fn load_with_env<P, F>(path: P, lookup: F) -> EngineResult<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();

        let mut server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;
        let locale = Self::load_yaml::<LocaleConfig>(&path.join("locale.yaml"))?;

        Self::apply_env_overrides(&mut server, lookup)?;

        Ok(Self {
            config: AppConfig { server, locale },
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn apply_env_overrides<F>(server: &mut ServerConfig, lookup: F) -> EngineResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV) {
            server.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            server.port = port.parse().map_err(|_| EngineError::ConfigParseError {
                path: format!("${}", PORT_ENV),
                message: format!("'{}' is not a valid port", port),
            })?;
        }

        if let Some(timezone) = lookup(TIMEZONE_ENV) {
            server.timezone = timezone.parse().map_err(|_| EngineError::ConfigParseError {
                path: format!("${}", TIMEZONE_ENV),
                message: format!("'{}' is not a known time zone", timezone),
            })?;
        }

        Ok(())
    }

    /// Returns the server section.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the export texts.
    pub fn locale(&self) -> &LocaleConfig {
        &self.config.locale
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(AppConfig::default())
    }
}
