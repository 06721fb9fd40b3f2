//! Configuration management for the Climate Observation API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides, e.g. `CLIMATE_DATABASE__URL`

use chrono::NaiveDate;
use config::{ConfigError, Environment, File, Map};
use serde::Deserialize;
use shared::{default_reference_date, ReportingWindow, DEFAULT_WINDOW_DAYS};

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Reporting window configuration
    pub climate: ClimateConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://Resources/hawaii.sqlite`
    pub url: String,

    /// Maximum number of read-only connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections kept open
    pub min_connections: u32,

    /// Seconds to wait for a free connection
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClimateConfig {
    /// Anchor of the "last year" window. Fixed for the process lifetime.
    pub reference_date: NaiveDate,

    /// Length of the window in days
    pub window_days: i64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading overrides from `vars` instead of the
    /// process environment when given
    fn load_from(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let environment = match &vars {
            Some(vars) => vars.get("CLIMATE_ENVIRONMENT").cloned(),
            None => std::env::var("CLIMATE_ENVIRONMENT").ok(),
        }
        .unwrap_or_else(|| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.url", "sqlite://Resources/hawaii.sqlite")?
            .set_default("database.max_connections", 4)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default(
                "climate.reference_date",
                default_reference_date().to_string(),
            )?
            .set_default("climate.window_days", DEFAULT_WINDOW_DAYS)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables: CLIMATE_ prefix, __ between keys
            .add_source(
                Environment::with_prefix("CLIMATE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        config.try_deserialize()
    }

    /// The reporting window derived from the configured reference date
    pub fn window(&self) -> ReportingWindow {
        ReportingWindow::new(self.climate.reference_date, self.climate.window_days)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://Resources/hawaii.sqlite".to_string(),
            max_connections: 4,
            min_connections: 1,
            acquire_timeout_secs: 30,
        }
    }
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}
