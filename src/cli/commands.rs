//! CLI command definitions and parsing.

use super::errors::CommandParseError;

/// Submitter recorded when `add` is given no `--by`.
pub const DEFAULT_SUBMITTER: &str = "anonymous";

/// Recipe book CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeCommand {
    /// Print a duration in words.
    Duration {
        /// ISO-8601 duration string.
        duration: String,
    },

    /// Check a duration against the permissive grammar.
    Validate {
        /// ISO-8601 duration string.
        duration: String,
    },

    /// Save a recipe.
    Add {
        /// Recipe title.
        title: String,
        /// Preparation time.
        prep_time: Option<String>,
        /// Cooking time.
        cook_time: Option<String>,
        /// Total time.
        total_time: Option<String>,
        /// Submitting user.
        submitted_by: String,
    },

    /// List a page of recipes.
    List {
        /// Page number.
        page: Option<i64>,
        /// Rows per page; the configured default when absent.
        page_size: Option<i64>,
    },

    /// Show help.
    Help,
}

impl RecipeCommand {
    /// Parse a command from string arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] for a missing or unknown command, an
    /// unknown flag, or a missing or non-numeric flag value.
    pub fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        let Some(first) = args.first() else {
            return Err(CommandParseError::MissingCommand);
        };

        let cmd = first.to_lowercase();
        match cmd.as_str() {
            "duration" => Ok(Self::Duration {
                duration: positional(args, "duration")?,
            }),

            "validate" => Ok(Self::Validate {
                duration: positional(args, "duration")?,
            }),

            "add" => {
                let title = positional(args, "title")?;
                let mut prep_time = None;
                let mut cook_time = None;
                let mut total_time = None;
                let mut submitted_by = DEFAULT_SUBMITTER.to_string();

                let mut i = 2;
                while i < args.len() {
                    let flag = args[i].as_str();
                    match flag {
                        "--prep" => prep_time = Some(flag_value(args, &mut i, flag)?),
                        "--cook" => cook_time = Some(flag_value(args, &mut i, flag)?),
                        "--total" => total_time = Some(flag_value(args, &mut i, flag)?),
                        "--by" => submitted_by = flag_value(args, &mut i, flag)?,
                        _ => return Err(CommandParseError::UnknownFlag(args[i].clone())),
                    }
                    i += 1;
                }

                Ok(Self::Add {
                    title,
                    prep_time,
                    cook_time,
                    total_time,
                    submitted_by,
                })
            }

            "list" | "ls" => {
                let mut page = None;
                let mut page_size = None;

                let mut i = 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "--page" | "-p" => {
                            page = Some(numeric_flag_value(args, &mut i, "--page")?);
                        }
                        "--page-size" | "-s" => {
                            page_size = Some(numeric_flag_value(args, &mut i, "--page-size")?);
                        }
                        _ => return Err(CommandParseError::UnknownFlag(args[i].clone())),
                    }
                    i += 1;
                }

                Ok(Self::List { page, page_size })
            }

            "help" | "--help" | "-h" => Ok(Self::Help),

            _ => Err(CommandParseError::UnknownCommand(cmd)),
        }
    }
}

fn positional(args: &[String], name: &str) -> Result<String, CommandParseError> {
    args.get(1)
        .cloned()
        .ok_or_else(|| CommandParseError::MissingValue(name.into()))
}

/// Advances `i` past the flag and returns its value.
fn flag_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, CommandParseError> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| CommandParseError::MissingValue(flag.into()))
}

fn numeric_flag_value(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<i64, CommandParseError> {
    let value = flag_value(args, i, flag)?;
    value.parse().map_err(|_| CommandParseError::InvalidValue {
        flag: flag.into(),
        value,
    })
}
