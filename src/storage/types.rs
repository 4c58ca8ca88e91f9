//! Storage types for database operations.
//!
//! - [`NewRecipe`]: Recipe as submitted, before it has an ID
//! - [`StoredRecipe`]: Recipe row as stored

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::{parse_cook_times, CookTimes};
use crate::error::DurationError;

/// A recipe submission.
///
/// Timing fields are raw ISO-8601 duration strings; they are validated on
/// insert and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    /// Recipe title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Preparation time.
    pub prep_time: Option<String>,
    /// Cooking time.
    pub cook_time: Option<String>,
    /// Total time.
    pub total_time: Option<String>,
    /// ID of the submitting user.
    pub submitted_by: String,
}

impl NewRecipe {
    /// Create a recipe submission with no description or timings.
    #[must_use]
    pub fn new(title: impl Into<String>, submitted_by: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            submitted_by: submitted_by.into(),
        }
    }

    /// Set description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set preparation time.
    #[must_use]
    pub fn with_prep_time(mut self, prep_time: impl Into<String>) -> Self {
        self.prep_time = Some(prep_time.into());
        self
    }

    /// Set cooking time.
    #[must_use]
    pub fn with_cook_time(mut self, cook_time: impl Into<String>) -> Self {
        self.cook_time = Some(cook_time.into());
        self
    }

    /// Set total time.
    #[must_use]
    pub fn with_total_time(mut self, total_time: impl Into<String>) -> Self {
        self.total_time = Some(total_time.into());
        self
    }
}

/// Recipe stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecipe {
    /// Unique recipe identifier.
    pub id: String,
    /// Recipe title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Preparation time, as entered.
    pub prep_time: Option<String>,
    /// Cooking time, as entered.
    pub cook_time: Option<String>,
    /// Total time, as entered.
    pub total_time: Option<String>,
    /// ID of the submitting user.
    pub submitted_by: String,
    /// Creation timestamp.
    pub created_date: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_date: DateTime<Utc>,
}

impl StoredRecipe {
    /// Build a stored recipe from a submission.
    #[must_use]
    pub fn from_new(id: impl Into<String>, recipe: &NewRecipe, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            prep_time: recipe.prep_time.clone(),
            cook_time: recipe.cook_time.clone(),
            total_time: recipe.total_time.clone(),
            submitted_by: recipe.submitted_by.clone(),
            created_date: now,
            updated_date: now,
        }
    }

    /// Parse the three timing fields.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::Malformed`] if a stored value does not
    /// match the strict grammar (for example a week duration).
    pub fn cook_times(&self) -> Result<CookTimes, DurationError> {
        parse_cook_times(
            self.prep_time.as_deref(),
            self.cook_time.as_deref(),
            self.total_time.as_deref(),
        )
    }
}
