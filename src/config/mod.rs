//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (including a `.env` file)
//! - Configuration validation
//! - Default value handling
//!
//! Configuration is loaded once at process start and passed by reference.
//! The duration codec and paginator never read it.
//!
//! # Example
//!
//! ```
//! use recipe_book::config::{Config, DEFAULT_PAGE_SIZE};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_dir: "./data".to_string(),
//!     database_file: "recipes.db".to_string(),
//!     log_level: "info".to_string(),
//!     page_size: DEFAULT_PAGE_SIZE,
//! };
//!
//! assert!(config.database_path().ends_with("recipes.db"));
//! ```

mod validation;

pub use validation::{validate_config, MAX_PAGE_SIZE};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default database directory.
pub const DEFAULT_DATABASE_DIR: &str = "./data";

/// Default database file name.
pub const DEFAULT_DATABASE_FILE: &str = "recipes.db";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default rows per page for list commands.
pub const DEFAULT_PAGE_SIZE: i64 = crate::pagination::DEFAULT_PAGE_SIZE;

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the `SQLite` database.
    pub database_dir: String,
    /// Database file name inside `database_dir`.
    pub database_file: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Rows per page when a list request does not specify one.
    pub page_size: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_DIR`: Directory for the database (default: `./data`)
    /// - `DATABASE_FILE`: Database file name (default: `recipes.db`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `PAGE_SIZE`: Default rows per page (default: `100`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `PAGE_SIZE` is not a valid integer
    /// - Any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_dir =
            std::env::var("DATABASE_DIR").unwrap_or_else(|_| DEFAULT_DATABASE_DIR.into());
        let database_file =
            std::env::var("DATABASE_FILE").unwrap_or_else(|_| DEFAULT_DATABASE_FILE.into());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());
        let page_size = parse_env_i64("PAGE_SIZE", DEFAULT_PAGE_SIZE)?;

        let config = Self {
            database_dir,
            database_file,
            log_level,
            page_size,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Full path to the database file.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database_dir).join(&self.database_file)
    }
}

/// Parse an environment variable as i64, using a default if not set.
fn parse_env_i64(name: &str, default: i64) -> Result<i64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be an integer".into(),
        })
    })
}
