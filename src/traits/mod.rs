//! Trait definitions for mockable dependencies.
//!
//! This module defines:
//! - [`RecipeStore`]: Recipe data-access abstraction
//!
//! # Mocking
//!
//! Traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::pagination::PaginationWindow;
use crate::storage::{NewRecipe, StoredRecipe};

/// Recipe store trait for mocking.
///
/// This trait abstracts recipe persistence so that services can be tested
/// without a database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Validate and save a new recipe.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidRecipe`] if a timing field is not a
    /// valid duration, or another [`StorageError`] if the database
    /// operation fails.
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<StoredRecipe, StorageError>;

    /// Get a recipe by ID.
    ///
    /// Returns `None` if the recipe doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_recipe(&self, id: &str) -> Result<Option<StoredRecipe>, StorageError>;

    /// Fetch recipes using `window.take` and `window.skip` literally.
    ///
    /// Implementations must return rows in a deterministic order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn fetch_recipes(
        &self,
        window: PaginationWindow,
    ) -> Result<Vec<StoredRecipe>, StorageError>;
}
