//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Recipe CRUD operations
//! - Paginated recipe listing
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! Recipe timing fields are validated on insert and stored as the raw
//! duration strings; parsing happens when they are displayed.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `recipe`: Recipe operations
//! - `trait_impl`: `RecipeStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use recipe_book::pagination::PaginationRequest;
//! use recipe_book::storage::{NewRecipe, SqliteStorage};
//!
//! let storage = SqliteStorage::new("./data/recipes.db").await?;
//! storage.create_recipe(&NewRecipe::new("Soup", "user-1").with_cook_time("PT1H")).await?;
//! let page = storage.list_recipes(PaginationRequest::new(1, 20)).await?;
//! ```

mod core;
mod recipe;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use types::{NewRecipe, StoredRecipe};
