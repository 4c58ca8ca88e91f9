//! Configuration validation.

use super::Config;
use crate::error::ConfigError;

/// Maximum allowed default page size.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `DATABASE_FILE` must not be empty
/// - `PAGE_SIZE` must be between 1 and 1000
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.database_file.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DATABASE_FILE".into(),
            reason: "must not be empty".into(),
        });
    }

    if !(1..=MAX_PAGE_SIZE).contains(&config.page_size) {
        return Err(ConfigError::InvalidValue {
            var: "PAGE_SIZE".into(),
            reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn create_valid_config() -> Config {
        Config {
            database_dir: "./data".to_string(),
            database_file: "recipes.db".to_string(),
            log_level: "info".to_string(),
            page_size: 100,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&create_valid_config()).is_ok());
    }

    #[test]
    fn test_blank_database_file() {
        let mut config = create_valid_config();
        config.database_file = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "DATABASE_FILE"));
    }

    #[test_case(0 ; "zero")]
    #[test_case(-5 ; "negative")]
    #[test_case(MAX_PAGE_SIZE + 1 ; "above maximum")]
    fn test_page_size_out_of_range(page_size: i64) {
        let mut config = create_valid_config();
        config.page_size = page_size;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "PAGE_SIZE"));
    }

    #[test_case(1 ; "minimum")]
    #[test_case(MAX_PAGE_SIZE ; "maximum")]
    fn test_page_size_boundaries(page_size: i64) {
        let mut config = create_valid_config();
        config.page_size = page_size;
        assert!(validate_config(&config).is_ok());
    }
}
