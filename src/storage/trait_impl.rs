//! `RecipeStore` implementation for `SqliteStorage`.

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::pagination::PaginationWindow;
use crate::traits::RecipeStore;

use super::core::SqliteStorage;
use super::types::{NewRecipe, StoredRecipe};

#[async_trait]
impl RecipeStore for SqliteStorage {
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<StoredRecipe, StorageError> {
        Self::create_recipe(self, recipe).await
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<StoredRecipe>, StorageError> {
        Self::get_recipe(self, id).await
    }

    async fn fetch_recipes(
        &self,
        window: PaginationWindow,
    ) -> Result<Vec<StoredRecipe>, StorageError> {
        Self::fetch_recipes(self, window).await
    }
}

/// Blanket implementation for `Arc<SqliteStorage>` to allow sharing storage across threads.
#[async_trait]
impl RecipeStore for Arc<SqliteStorage> {
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<StoredRecipe, StorageError> {
        self.as_ref().create_recipe(recipe).await
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<StoredRecipe>, StorageError> {
        self.as_ref().get_recipe(id).await
    }

    async fn fetch_recipes(
        &self,
        window: PaginationWindow,
    ) -> Result<Vec<StoredRecipe>, StorageError> {
        self.as_ref().fetch_recipes(window).await
    }
}
