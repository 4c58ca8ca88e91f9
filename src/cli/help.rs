//! Help text for CLI commands.

/// Get help text for CLI commands.
#[must_use]
pub const fn help_text() -> &'static str {
    r#"Recipe Book Commands:

  duration ISO        Print an ISO-8601 duration in words
                      e.g. PT1H45M -> "1 hour, 45 minutes"

  validate ISO        Print "valid" or "invalid" for a duration
                      Weeks (P2W) validate but cannot be displayed

  add TITLE [options] Save a recipe
    --prep ISO          Preparation time
    --cook ISO          Cooking time
    --total ISO         Total time
    --by USER           Submitting user (default: anonymous)

  list [options]      List recipes as JSON
    --page, -p N        Page number (default: 0, same as 1)
    --page-size, -s N   Rows per page (default: PAGE_SIZE)

  help                Show this message

Tips for writing times in ISO-8601:
  Start with PT: P is for period, T is for time.
  Use H for hours, M for minutes, and S for seconds.

Examples:
  recipe-book duration PT1H
  recipe-book add "Pancakes" --prep PT10M --cook PT20M
  recipe-book list --page 2 --page-size 20
"#
}
