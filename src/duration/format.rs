//! Human-readable duration rendering.

use super::IsoDuration;

/// Separator used when joining rendered phrases for display.
pub const PHRASE_SEPARATOR: &str = ", ";

/// Renders a duration as phrases like `"1 hour"` and `"30 minutes"`.
///
/// Phrases come in fixed order (years down to seconds). Zero and `None`
/// fields are skipped, so an unspecified or all-zero duration renders as an
/// empty list.
#[must_use]
pub fn render_duration(duration: &IsoDuration) -> Vec<String> {
    duration
        .components()
        .into_iter()
        .filter_map(|(value, unit)| phrase(value?, unit))
        .collect()
}

/// Renders a duration and joins the phrases with [`PHRASE_SEPARATOR`].
#[must_use]
pub fn pretty_print_duration(duration: &IsoDuration) -> String {
    render_duration(duration).join(PHRASE_SEPARATOR)
}

fn phrase(value: u64, unit: &str) -> Option<String> {
    match value {
        0 => None,
        1 => Some(format!("1 {unit}")),
        n => Some(format!("{n} {unit}s")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_render_unspecified_is_empty() {
        assert!(render_duration(&IsoDuration::unspecified()).is_empty());
    }

    #[test]
    fn test_render_all_zero_is_empty() {
        assert!(render_duration(&IsoDuration::new(0, 0, 0, 0, 0, 0)).is_empty());
    }

    #[test]
    fn test_render_fixed_order() {
        let duration = IsoDuration::new(2, 1, 3, 1, 30, 45);
        assert_eq!(
            render_duration(&duration),
            vec![
                "2 years",
                "1 month",
                "3 days",
                "1 hour",
                "30 minutes",
                "45 seconds"
            ]
        );
    }

    #[test]
    fn test_render_mixed_fields() {
        let duration = IsoDuration {
            hours: Some(2),
            seconds: Some(1),
            ..IsoDuration::unspecified()
        };
        assert_eq!(render_duration(&duration), vec!["2 hours", "1 second"]);
    }

    #[test_case(1, "1 minute" ; "singular")]
    #[test_case(2, "2 minutes" ; "plural")]
    #[test_case(90, "90 minutes" ; "large")]
    fn test_render_pluralization(minutes: u64, expected: &str) {
        let duration = IsoDuration::new(0, 0, 0, 0, minutes, 0);
        assert_eq!(render_duration(&duration), vec![expected]);
    }

    #[test]
    fn test_pretty_print_joins_with_comma() {
        let duration = IsoDuration::new(0, 0, 0, 1, 45, 0);
        assert_eq!(pretty_print_duration(&duration), "1 hour, 45 minutes");
    }

    #[test]
    fn test_pretty_print_empty() {
        assert_eq!(pretty_print_duration(&IsoDuration::unspecified()), "");
    }
}
