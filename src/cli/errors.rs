//! CLI command parsing errors.

use thiserror::Error;

/// Error parsing CLI commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    /// No command provided.
    #[error("No command provided. Use 'help' for available commands.")]
    MissingCommand,
    /// Unknown command.
    #[error("Unknown command: '{0}'. Use 'help' for available commands.")]
    UnknownCommand(String),
    /// Unknown flag.
    #[error("Unknown flag: '{0}'")]
    UnknownFlag(String),
    /// Missing value for flag or positional argument.
    #[error("Missing value for '{0}'")]
    MissingValue(String),
    /// Invalid value for flag.
    #[error("Invalid value '{value}' for '{flag}'")]
    InvalidValue {
        /// The flag with the invalid value.
        flag: String,
        /// The invalid value that was provided.
        value: String,
    },
}
