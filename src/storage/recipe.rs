//! Recipe storage operations.

#![allow(clippy::missing_errors_doc)]

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::duration::ensure_valid_duration;
use crate::error::StorageError;
use crate::pagination::{fetch_page, PageResult, PaginationRequest, PaginationWindow};

use super::core::SqliteStorage;
use super::types::{NewRecipe, StoredRecipe};

const RECIPE_COLUMNS: &str = "id, title, description, prep_time, cook_time, total_time, \
                              submitted_by, created_date, updated_date";

impl SqliteStorage {
    /// Validate and insert a new recipe.
    ///
    /// Timing fields are checked with the permissive duration grammar and
    /// stored verbatim.
    pub async fn create_recipe(&self, recipe: &NewRecipe) -> Result<StoredRecipe, StorageError> {
        for (label, value) in [
            ("prepTime", &recipe.prep_time),
            ("cookTime", &recipe.cook_time),
            ("totalTime", &recipe.total_time),
        ] {
            ensure_valid_duration(label, value.as_deref()).inspect_err(|e| {
                tracing::warn!(field = label, error = %e, "Rejected recipe duration");
            })?;
        }

        let stored = StoredRecipe::from_new(Self::generate_id(), recipe, Utc::now());
        let created = Self::format_datetime(stored.created_date);

        sqlx::query(
            "INSERT INTO recipes (id, title, description, prep_time, cook_time, total_time, \
             submitted_by, created_date, updated_date) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&stored.id)
        .bind(&stored.title)
        .bind(&stored.description)
        .bind(&stored.prep_time)
        .bind(&stored.cook_time)
        .bind(&stored.total_time)
        .bind(&stored.submitted_by)
        .bind(&created)
        .bind(&created)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("INSERT recipes", format!("{e}")))?;

        tracing::debug!(recipe_id = %stored.id, "Created recipe");
        Ok(stored)
    }

    /// Get a recipe by ID.
    pub async fn get_recipe(&self, id: &str) -> Result<Option<StoredRecipe>, StorageError> {
        let row = sqlx::query(&format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT recipes", format!("{e}")))?;

        row.as_ref().map(Self::row_to_recipe).transpose()
    }

    /// Delete a recipe.
    pub async fn delete_recipe(&self, id: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("DELETE recipes", format!("{e}")))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::RecipeNotFound {
                recipe_id: id.to_string(),
            });
        }

        Ok(())
    }

    /// Fetch up to `window.take` recipes after skipping `window.skip`.
    ///
    /// Rows come back oldest first, ties broken by insertion order.
    pub async fn fetch_recipes(
        &self,
        window: PaginationWindow,
    ) -> Result<Vec<StoredRecipe>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes \
             ORDER BY created_date ASC, rowid ASC LIMIT ? OFFSET ?"
        ))
        .bind(window.take)
        .bind(window.skip)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT recipes", format!("{e}")))?;

        tracing::debug!(
            take = window.take,
            skip = window.skip,
            rows = rows.len(),
            "Fetched recipe window"
        );

        rows.iter().map(Self::row_to_recipe).collect()
    }

    /// Fetch one page of recipes.
    pub async fn list_recipes(
        &self,
        request: PaginationRequest,
    ) -> Result<PageResult<StoredRecipe>, StorageError> {
        fetch_page(request, |window| self.fetch_recipes(window)).await
    }

    fn row_to_recipe(row: &SqliteRow) -> Result<StoredRecipe, StorageError> {
        let created_date: String = row.get("created_date");
        let updated_date: String = row.get("updated_date");

        Ok(StoredRecipe {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            prep_time: row.get("prep_time"),
            cook_time: row.get("cook_time"),
            total_time: row.get("total_time"),
            submitted_by: row.get("submitted_by"),
            created_date: Self::parse_datetime(&created_date)?,
            updated_date: Self::parse_datetime(&updated_date)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::DurationError;
    use crate::pagination::compute_window;
    use crate::storage::core::tests::test_storage;
    use pretty_assertions::assert_eq;

    async fn seed(storage: &SqliteStorage, count: usize) -> Vec<StoredRecipe> {
        let mut created = Vec::with_capacity(count);
        for i in 0..count {
            let recipe = NewRecipe::new(format!("Recipe {i}"), "user-1").with_cook_time("PT30M");
            created.push(storage.create_recipe(&recipe).await.expect("create"));
        }
        created
    }

    #[tokio::test]
    async fn test_create_and_get_recipe() {
        let storage = test_storage().await;
        let recipe = NewRecipe::new("Pancakes", "user-1")
            .with_description("Fluffy")
            .with_prep_time("PT10M")
            .with_cook_time("PT20M");

        let created = storage.create_recipe(&recipe).await.expect("create");
        let fetched = storage
            .get_recipe(&created.id)
            .await
            .expect("fetch")
            .expect("recipe exists");

        assert_eq!(fetched.title, "Pancakes");
        assert_eq!(fetched.description.as_deref(), Some("Fluffy"));
        assert_eq!(fetched.prep_time.as_deref(), Some("PT10M"));
        assert_eq!(fetched.cook_time.as_deref(), Some("PT20M"));
        assert_eq!(fetched.total_time, None);
        assert_eq!(
            fetched.created_date.timestamp_micros(),
            created.created_date.timestamp_micros()
        );
    }

    #[tokio::test]
    async fn test_create_recipe_stores_weeks_verbatim() {
        let storage = test_storage().await;
        let recipe = NewRecipe::new("Sauerkraut", "user-1").with_total_time("P3W");

        let created = storage.create_recipe(&recipe).await.expect("create");
        let fetched = storage.get_recipe(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched.total_time.as_deref(), Some("P3W"));
    }

    #[tokio::test]
    async fn test_create_recipe_rejects_invalid_duration() {
        let storage = test_storage().await;
        let recipe = NewRecipe::new("Bad", "user-1").with_cook_time("PT1h30m");

        let err = storage.create_recipe(&recipe).await.unwrap_err();
        assert_eq!(
            err,
            StorageError::InvalidRecipe(DurationError::InvalidField {
                label: "cookTime".to_string(),
                input: "PT1h30m".to_string(),
            })
        );

        let page = storage
            .list_recipes(PaginationRequest::default())
            .await
            .unwrap();
        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn test_get_recipe_not_found() {
        let storage = test_storage().await;
        let result = storage.get_recipe("nonexistent").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_recipe() {
        let storage = test_storage().await;
        let created = seed(&storage, 1).await.remove(0);

        storage.delete_recipe(&created.id).await.expect("delete");
        assert!(storage.get_recipe(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_recipe_not_found() {
        let storage = test_storage().await;
        let result = storage.delete_recipe("nonexistent").await;
        assert!(matches!(result, Err(StorageError::RecipeNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_recipes_honors_window() {
        let storage = test_storage().await;
        let created = seed(&storage, 7).await;

        let rows = storage
            .fetch_recipes(compute_window(&PaginationRequest::new(2, 3)))
            .await
            .unwrap();

        let ids: Vec<_> = rows.iter().map(|r| r.id.clone()).collect();
        let expected: Vec<_> = created[3..7].iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_list_recipes_pages() {
        let storage = test_storage().await;
        let created = seed(&storage, 5).await;

        let first = storage
            .list_recipes(PaginationRequest::new(1, 2))
            .await
            .unwrap();
        assert_eq!(first.results.len(), 2);
        assert!(first.more_records_exist);
        assert_eq!(first.results[0].id, created[0].id);

        let third = storage
            .list_recipes(PaginationRequest::new(3, 2))
            .await
            .unwrap();
        assert_eq!(third.results.len(), 1);
        assert!(!third.more_records_exist);
        assert_eq!(third.results[0].id, created[4].id);
    }

    #[tokio::test]
    async fn test_list_recipes_page_zero_matches_page_one() {
        let storage = test_storage().await;
        seed(&storage, 3).await;

        let zero = storage
            .list_recipes(PaginationRequest::new(0, 2))
            .await
            .unwrap();
        let one = storage
            .list_recipes(PaginationRequest::new(1, 2))
            .await
            .unwrap();
        assert_eq!(zero, one);
    }

    #[tokio::test]
    async fn test_list_recipes_exact_fit() {
        let storage = test_storage().await;
        seed(&storage, 4).await;

        let page = storage
            .list_recipes(PaginationRequest::new(1, 4))
            .await
            .unwrap();
        assert_eq!(page.results.len(), 4);
        assert!(!page.more_records_exist);
    }
}
