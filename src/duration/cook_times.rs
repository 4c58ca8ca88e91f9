//! Recipe timing fields parsed together.

use serde::{Deserialize, Serialize};

use super::{parse_iso8601_duration, pretty_print_duration, IsoDuration};
use crate::error::DurationError;

/// The three timing fields of a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookTimes {
    /// Preparation time.
    pub prep_time: IsoDuration,
    /// Cooking time.
    pub cook_time: IsoDuration,
    /// Total time.
    pub total_time: IsoDuration,
}

impl CookTimes {
    /// Pretty-printed `(prep, cook, total)` strings, empty when unspecified.
    #[must_use]
    pub fn pretty(&self) -> (String, String, String) {
        (
            pretty_print_duration(&self.prep_time),
            pretty_print_duration(&self.cook_time),
            pretty_print_duration(&self.total_time),
        )
    }
}

/// Parses the prep, cook and total time strings of a recipe.
///
/// # Errors
///
/// Returns the first [`DurationError::Malformed`] encountered, in
/// prep, cook, total order.
pub fn parse_cook_times(
    prep_time: Option<&str>,
    cook_time: Option<&str>,
    total_time: Option<&str>,
) -> Result<CookTimes, DurationError> {
    Ok(CookTimes {
        prep_time: parse_iso8601_duration(prep_time)?,
        cook_time: parse_iso8601_duration(cook_time)?,
        total_time: parse_iso8601_duration(total_time)?,
    })
}
