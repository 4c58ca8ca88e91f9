//! Duration grammars: permissive validation and strict parsing.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::IsoDuration;
use crate::error::DurationError;

/// The literal string that stored nulls sometimes round-trip as.
pub const NULL_LITERAL: &str = "null";

/// Accepts weeks. At least one component is checked separately since the
/// `regex` crate has no lookahead.
#[allow(clippy::expect_used)]
static PERMISSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P([0-9]+Y)?([0-9]+M)?([0-9]+W)?([0-9]+D)?(T([0-9]+H)?([0-9]+M)?([0-9]+S)?)?$")
        .expect("permissive duration pattern is valid")
});

/// No week component: [`IsoDuration`] has nowhere to put it.
#[allow(clippy::expect_used)]
static STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^P(?:(?P<years>[0-9]+)Y)?(?:(?P<months>[0-9]+)M)?(?:(?P<days>[0-9]+)D)?",
        r"(?:T(?:(?P<hours>[0-9]+)H)?(?:(?P<minutes>[0-9]+)M)?(?:(?P<seconds>[0-9]+)S)?)?$",
    ))
    .expect("strict duration pattern is valid")
});

/// Returns true if the string is present and not blank.
#[must_use]
pub fn is_usable_string(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Checks a string against the full ISO-8601 duration grammar.
///
/// Weeks are accepted, unit letters are case-sensitive, and at least one
/// numeric component must be present (`P` and `PT` are rejected).
///
/// # Example
///
/// ```
/// use recipe_book::duration::is_valid_iso8601_duration;
///
/// assert!(is_valid_iso8601_duration("PT1H30M"));
/// assert!(is_valid_iso8601_duration("P2W"));
/// assert!(!is_valid_iso8601_duration("PT1h30m"));
/// ```
#[must_use]
pub fn is_valid_iso8601_duration(duration: &str) -> bool {
    PERMISSIVE.is_match(duration) && duration.bytes().any(|b| b.is_ascii_digit())
}

/// Returns true if the value is absent or a valid ISO-8601 duration.
///
/// Absent means `None`, empty, or whitespace only. This never fails.
#[must_use]
pub fn is_valid_duration(duration: Option<&str>) -> bool {
    match duration {
        Some(text) if is_usable_string(Some(text)) => is_valid_iso8601_duration(text),
        _ => true,
    }
}

/// Guards a labelled form field before it is persisted.
///
/// # Errors
///
/// Returns [`DurationError::InvalidField`] if the value is present but not a
/// valid duration.
pub fn ensure_valid_duration(label: &str, duration: Option<&str>) -> Result<(), DurationError> {
    match duration {
        Some(text) if !is_valid_duration(Some(text)) => Err(DurationError::InvalidField {
            label: label.to_string(),
            input: text.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Parses an ISO-8601 duration into its six components.
///
/// `None`, `""` and `"null"` yield [`IsoDuration::unspecified`]. Any other
/// string must match `P(nY)?(nM)?(nD)?(T(nH)?(nM)?(nS)?)?` exactly; absent
/// components become `Some(0)`.
///
/// # Errors
///
/// Returns [`DurationError::Malformed`] if the string does not match the
/// strict grammar (including week components and lowercase units) or a
/// component does not fit in a `u64`.
pub fn parse_iso8601_duration(duration: Option<&str>) -> Result<IsoDuration, DurationError> {
    let text = match duration {
        None | Some("" | NULL_LITERAL) => return Ok(IsoDuration::unspecified()),
        Some(text) => text,
    };

    let malformed = || DurationError::Malformed {
        input: text.to_string(),
    };
    let captures = STRICT.captures(text).ok_or_else(malformed)?;
    let field = |name: &str| component(&captures, name).ok_or_else(malformed);

    Ok(IsoDuration::new(
        field("years")?,
        field("months")?,
        field("days")?,
        field("hours")?,
        field("minutes")?,
        field("seconds")?,
    ))
}

/// Absent group is zero; `None` only on overflow.
fn component(captures: &Captures<'_>, name: &str) -> Option<u64> {
    captures
        .name(name)
        .map_or(Some(0), |m| m.as_str().parse().ok())
}
