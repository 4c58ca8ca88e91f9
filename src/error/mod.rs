//! Error types for the recipe book.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`DurationError`]: ISO-8601 duration parsing and validation errors
//! - [`StorageError`]: Database operation errors
//! - [`ConfigError`]: Configuration errors
//!
//! The paginator has no error type: every input produces a well-defined
//! window and page.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by the binary and by services that
/// cross subsystem boundaries.
#[derive(Debug, Error)]
pub enum AppError {
    /// Duration error.
    #[error("Duration error: {0}")]
    Duration(#[from] DurationError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Duration errors.
///
/// Both variants carry the offending input so callers can surface it as a
/// field-level validation message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The string does not match the strict `P..Y..M..DT..H..M..S` grammar.
    #[error("Invalid ISO8601 Duration: {input}")]
    Malformed {
        /// The rejected duration string.
        input: String,
    },

    /// A labelled form field holds a duration the permissive grammar rejects.
    #[error("{label}: {input} is not a valid ISO8601 Duration")]
    InvalidField {
        /// The field label (e.g. `prepTime`).
        label: String,
        /// The rejected duration string.
        input: String,
    },
}

impl DurationError {
    /// Returns the duration string that caused the error.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Malformed { input } | Self::InvalidField { input, .. } => input,
        }
    }
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Recipe not found.
    #[error("Recipe not found: {recipe_id}")]
    RecipeNotFound {
        /// The recipe ID that was not found.
        recipe_id: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// A recipe was rejected before it reached the database.
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(#[from] DurationError),

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
