//! Offset pagination with over-fetch.
//!
//! A list query fetches one row more than the page size. If that extra row
//! comes back, more records exist; no separate count query is needed.
//!
//! - [`compute_window`]: page request to `take`/`skip`
//! - [`trim_to_page`]: over-fetched batch to [`PageResult`]
//! - [`fetch_page`]: both steps around an async fetch
//!
//! Page numbers are effectively one-based: pages `0` and `1` both start at
//! offset zero.
//!
//! # Example
//!
//! ```
//! use recipe_book::pagination::{compute_window, trim_to_page, PaginationRequest};
//!
//! let window = compute_window(&PaginationRequest::new(2, 10));
//! assert_eq!((window.take, window.skip), (11, 10));
//!
//! let page = trim_to_page((0..11).collect::<Vec<_>>(), window.page_size);
//! assert_eq!(page.results.len(), 10);
//! assert!(page.more_records_exist);
//! ```

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Default page size when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Default page number when the request does not specify one.
pub const DEFAULT_PAGE: i64 = 0;

/// Extra rows fetched beyond the page size to detect a following page.
pub const TAKE_ADJUSTMENT: i64 = 1;

/// A requested page.
///
/// Missing fields deserialize to their defaults, so `{}` is page 0 with
/// 100 rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationRequest {
    /// Page number.
    pub page: i64,
    /// Rows per page. Callers must supply a positive value.
    pub page_size: i64,
}

impl PaginationRequest {
    /// Create a request for a specific page.
    #[must_use]
    pub const fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// The `take`/`skip` pair that drives a single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationWindow {
    /// Maximum rows to fetch (`page_size + 1`).
    pub take: i64,
    /// Leading rows to skip.
    pub skip: i64,
    /// The requested page size, used to trim the batch afterwards.
    pub page_size: i64,
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// At most `page_size` results, in fetch order.
    pub results: Vec<T>,
    /// True if the fetch returned more rows than the page size.
    pub more_records_exist: bool,
}

impl<T> PageResult<T> {
    /// Transform each result, keeping `more_records_exist`.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            results: self.results.into_iter().map(f).collect(),
            more_records_exist: self.more_records_exist,
        }
    }

    /// Fallible [`PageResult::map`]; stops at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<PageResult<U>, E> {
        Ok(PageResult {
            results: self.results.into_iter().map(f).collect::<Result<_, _>>()?,
            more_records_exist: self.more_records_exist,
        })
    }
}

/// Converts a page request into a fetch window.
///
/// `take` is always `page_size + 1` and `skip` is
/// `max((page - 1) * page_size, 0)`. Out-of-range input saturates rather
/// than overflowing.
#[must_use]
pub const fn compute_window(request: &PaginationRequest) -> PaginationWindow {
    let page_size = request.page_size;
    let skip = request.page.saturating_sub(1).saturating_mul(page_size);
    PaginationWindow {
        take: page_size.saturating_add(TAKE_ADJUSTMENT),
        skip: if skip < 0 { 0 } else { skip },
        page_size,
    }
}

/// Trims an over-fetched batch down to one page.
///
/// A negative page size is treated as zero.
#[must_use]
pub fn trim_to_page<T>(mut raw: Vec<T>, page_size: i64) -> PageResult<T> {
    let limit = usize::try_from(page_size).unwrap_or(0);
    let more_records_exist = raw.len() > limit;
    raw.truncate(limit);
    PageResult {
        results: raw,
        more_records_exist,
    }
}

/// Computes the window, runs `fetch` with it, and trims the batch.
///
/// `fetch` must honor `take` and `skip` literally and return rows in a
/// deterministic order.
///
/// # Errors
///
/// Returns whatever error `fetch` returns, unchanged.
pub async fn fetch_page<T, E, F, Fut>(
    request: PaginationRequest,
    fetch: F,
) -> Result<PageResult<T>, E>
where
    F: FnOnce(PaginationWindow) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let window = compute_window(&request);
    let batch = fetch(window).await?;
    Ok(trim_to_page(batch, window.page_size))
}
