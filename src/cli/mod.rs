//! Command-line interface for the `recipe-book` binary.
//!
//! Arguments are parsed by hand into a [`RecipeCommand`]; the binary
//! dispatches on it.

mod commands;
mod errors;
mod help;


pub use commands::{RecipeCommand, DEFAULT_SUBMITTER};
pub use errors::CommandParseError;
pub use help::help_text;
