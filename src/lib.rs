//! Recipe Book
//!
//! The reusable core of a recipe and event-planning application.
//!
//! # Features
//!
//! - ISO-8601 duration validation, parsing, and human-readable rendering
//! - Offset pagination that over-fetches one row to detect further pages
//! - `SQLite` recipe store whose list queries use the paginator
//! - A small CLI around both
//!
//! # Quick Start
//!
//! ```bash
//! recipe-book duration PT1H45M
//! DATABASE_DIR=./data recipe-book list --page 1 --page-size 20
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────────┐   ┌───────────────┐
//! │   cli    │──▶│  RecipeService  │──▶│ SqliteStorage │──▶ SQLite
//! └──────────┘   └───────┬─────────┘   └───────┬───────┘
//!                        │                     │
//!                        ▼                     ▼
//!                  pagination ◀──────────  duration
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod pagination;
pub mod recipes;
pub mod storage;
pub mod traits;
