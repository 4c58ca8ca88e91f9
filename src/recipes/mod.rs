//! Recipe listing service.
//!
//! Combines the paginator and the duration codec over a [`RecipeStore`]:
//! list requests are over-fetched and trimmed, and each recipe's timing
//! fields are rendered for display.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pagination::{fetch_page, PageResult, PaginationRequest};
use crate::storage::{NewRecipe, StoredRecipe};
use crate::traits::RecipeStore;

/// A recipe as shown in a list, with human-readable times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Recipe ID.
    pub id: String,
    /// Recipe title.
    pub title: String,
    /// Preparation time, e.g. `"15 minutes"`. Empty if unspecified.
    pub prep_time: String,
    /// Cooking time. Empty if unspecified.
    pub cook_time: String,
    /// Total time. Empty if unspecified.
    pub total_time: String,
}

impl TryFrom<StoredRecipe> for RecipeSummary {
    type Error = AppError;

    fn try_from(recipe: StoredRecipe) -> Result<Self, Self::Error> {
        let (prep_time, cook_time, total_time) = recipe.cook_times()?.pretty();
        Ok(Self {
            id: recipe.id,
            title: recipe.title,
            prep_time,
            cook_time,
            total_time,
        })
    }
}

/// Recipe operations over any [`RecipeStore`].
#[derive(Debug, Clone)]
pub struct RecipeService<S> {
    store: S,
}

impl<S: RecipeStore> RecipeService<S> {
    /// Create a service over a store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Save a new recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if validation or the insert fails.
    pub async fn add_recipe(&self, recipe: &NewRecipe) -> Result<StoredRecipe, AppError> {
        Ok(self.store.create_recipe(recipe).await?)
    }

    /// List one page of recipes with rendered times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the fetch fails, or
    /// [`AppError::Duration`] if a stored timing field cannot be parsed.
    pub async fn list_recipes(
        &self,
        request: PaginationRequest,
    ) -> Result<PageResult<RecipeSummary>, AppError> {
        let page = fetch_page(request, |window| self.store.fetch_recipes(window)).await?;
        tracing::debug!(
            results = page.results.len(),
            more = page.more_records_exist,
            "Listed recipes"
        );
        page.try_map(RecipeSummary::try_from)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::{DurationError, StorageError};
    use crate::pagination::PaginationWindow;
    use crate::traits::MockRecipeStore;
    use chrono::Utc;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn stored(id: &str, cook_time: Option<&str>) -> StoredRecipe {
        let mut recipe = NewRecipe::new(format!("Recipe {id}"), "user-1");
        recipe.cook_time = cook_time.map(str::to_string);
        StoredRecipe::from_new(id, &recipe, Utc::now())
    }

    #[tokio::test]
    async fn test_list_recipes_over_fetches_and_trims() {
        let mut store = MockRecipeStore::new();
        store
            .expect_fetch_recipes()
            .with(eq(PaginationWindow {
                take: 3,
                skip: 2,
                page_size: 2,
            }))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    stored("c", Some("PT1H30M")),
                    stored("d", None),
                    stored("e", Some("PT5M")),
                ])
            });

        let service = RecipeService::new(store);
        let page = service
            .list_recipes(PaginationRequest::new(2, 2))
            .await
            .unwrap();

        assert!(page.more_records_exist);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].id, "c");
        assert_eq!(page.results[0].cook_time, "1 hour, 30 minutes");
        assert_eq!(page.results[1].cook_time, "");
    }

    #[tokio::test]
    async fn test_list_recipes_last_page() {
        let mut store = MockRecipeStore::new();
        store
            .expect_fetch_recipes()
            .returning(|_| Ok(vec![stored("a", Some("PT1M"))]));

        let service = RecipeService::new(store);
        let page = service
            .list_recipes(PaginationRequest::default())
            .await
            .unwrap();

        assert!(!page.more_records_exist);
        assert_eq!(page.results[0].cook_time, "1 minute");
    }

    #[tokio::test]
    async fn test_list_recipes_storage_error() {
        let mut store = MockRecipeStore::new();
        store.expect_fetch_recipes().returning(|_| {
            Err(StorageError::ConnectionFailed {
                message: "gone".to_string(),
            })
        });

        let service = RecipeService::new(store);
        let err = service
            .list_recipes(PaginationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_list_recipes_unparseable_stored_duration() {
        let mut store = MockRecipeStore::new();
        store
            .expect_fetch_recipes()
            .returning(|_| Ok(vec![stored("w", Some("P1W"))]));

        let service = RecipeService::new(store);
        let err = service
            .list_recipes(PaginationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Duration(DurationError::Malformed { ref input }) if input == "P1W"
        ));
    }

    #[tokio::test]
    async fn test_add_recipe_delegates() {
        let mut store = MockRecipeStore::new();
        store
            .expect_create_recipe()
            .times(1)
            .returning(|recipe| Ok(StoredRecipe::from_new("new-id", recipe, Utc::now())));

        let service = RecipeService::new(store);
        let created = service
            .add_recipe(&NewRecipe::new("Tea", "user-1").with_prep_time("PT3M"))
            .await
            .unwrap();

        assert_eq!(created.id, "new-id");
        assert_eq!(created.prep_time.as_deref(), Some("PT3M"));
    }

    #[test]
    fn test_summary_from_stored() {
        let summary = RecipeSummary::try_from(stored("x", Some("PT2H"))).unwrap();
        assert_eq!(summary.title, "Recipe x");
        assert_eq!(summary.cook_time, "2 hours");
        assert_eq!(summary.prep_time, "");
    }
}
