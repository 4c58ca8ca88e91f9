//! ISO-8601 duration codec.
//!
//! This module converts between duration strings such as `PT1H30M` and a
//! structured [`IsoDuration`], and renders durations as human-readable text:
//! - [`is_valid_duration`]: permissive validation (accepts weeks, treats
//!   absent input as valid)
//! - [`parse_iso8601_duration`]: strict parsing into six numeric fields
//! - [`render_duration`] / [`pretty_print_duration`]: display phrases
//! - [`parse_cook_times`]: the three timing fields of a recipe at once
//!
//! Validation and parsing deliberately use different grammars: a string with
//! a week component (`P2W`) passes validation but fails to parse.
//!
//! # Example
//!
//! ```
//! use recipe_book::duration::{parse_iso8601_duration, render_duration};
//!
//! let duration = parse_iso8601_duration(Some("PT1H30M")).unwrap();
//! assert_eq!(duration.hours, Some(1));
//! assert_eq!(render_duration(&duration), vec!["1 hour", "30 minutes"]);
//! ```

mod cook_times;
mod format;
mod grammar;

pub use cook_times::{parse_cook_times, CookTimes};
pub use format::{pretty_print_duration, render_duration, PHRASE_SEPARATOR};
pub use grammar::{
    ensure_valid_duration, is_usable_string, is_valid_duration, is_valid_iso8601_duration,
    parse_iso8601_duration, NULL_LITERAL,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;

/// A structured breakdown of an ISO-8601 duration.
///
/// Values produced by [`parse_iso8601_duration`] are either fully
/// unspecified (every field `None`, no duration was given) or fully
/// specified (every field `Some`, missing components are `Some(0)`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsoDuration {
    /// Years component.
    pub years: Option<u64>,
    /// Months component.
    pub months: Option<u64>,
    /// Days component.
    pub days: Option<u64>,
    /// Hours component.
    pub hours: Option<u64>,
    /// Minutes component.
    pub minutes: Option<u64>,
    /// Seconds component.
    pub seconds: Option<u64>,
}

impl IsoDuration {
    /// A duration with no fields set, meaning "no duration provided".
    #[must_use]
    pub const fn unspecified() -> Self {
        Self {
            years: None,
            months: None,
            days: None,
            hours: None,
            minutes: None,
            seconds: None,
        }
    }

    /// A fully specified duration.
    #[must_use]
    pub const fn new(
        years: u64,
        months: u64,
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
    ) -> Self {
        Self {
            years: Some(years),
            months: Some(months),
            days: Some(days),
            hours: Some(hours),
            minutes: Some(minutes),
            seconds: Some(seconds),
        }
    }

    /// Returns true if every field is `None`.
    #[must_use]
    pub const fn is_unspecified(&self) -> bool {
        self.years.is_none()
            && self.months.is_none()
            && self.days.is_none()
            && self.hours.is_none()
            && self.minutes.is_none()
            && self.seconds.is_none()
    }

    /// The fields paired with their singular unit names, largest first.
    pub(crate) const fn components(&self) -> [(Option<u64>, &'static str); 6] {
        [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ]
    }
}

impl FromStr for IsoDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso8601_duration(Some(s))
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty_print_duration(self))
    }
}
