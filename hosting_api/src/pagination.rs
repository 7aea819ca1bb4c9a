//! Walking paginated collections.
//!
//! [`fetch_all`] requests every page of a collection one after another and
//! hands each page's items to a consumer. [`fetch_page`] requests a single
//! page and returns a [`Paginated`] that can fetch its neighbours on demand.
//!
//! Both are generic over the item type and the error type, so errors from
//! the page fetcher (including resource-specific "not found" errors) reach
//! the caller unchanged.

use std::{future::Future, pin::Pin, sync::Arc};

use crate::{types::PaginationMeta, RequestParameters};

/// Items and paging metadata from a single page request.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: PaginationMeta) -> Self {
        Self { items, pagination }
    }
}

pub type PageFuture<T, E> = Pin<Box<dyn Future<Output = Result<Page<T>, E>> + Send>>;

/// Fetches one page for the given parameters.
///
/// Shared between a [`Paginated`] and the pages it navigates to.
pub type PageFetcher<T, E> = Arc<dyn Fn(RequestParameters) -> PageFuture<T, E> + Send + Sync>;

/// Requests pages `1..=total_pages` in order, passing each page's items to
/// `consume` before the next page is requested.
///
/// The page number is driven here rather than by the response, so the walk
/// always ends. A response without paging metadata counts as the only page.
/// The first error is returned immediately and no further pages are
/// requested; items already passed to `consume` should then be discarded.
pub async fn fetch_all<T, E, F, Fut, C>(
    parameters: &RequestParameters,
    mut fetch: F,
    mut consume: C,
) -> Result<(), E>
where
    F: FnMut(RequestParameters) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
    C: FnMut(Vec<T>),
{
    let mut current_page: u32 = 1;
    loop {
        tracing::debug!(page = current_page, "fetching page");
        let page = fetch(parameters.clone().with_page(current_page)).await?;
        let total_pages = page.pagination.total_pages;
        consume(page.items);

        if current_page >= total_pages {
            return Ok(());
        }
        current_page += 1;
    }
}

/// Collects the items of every page into one `Vec`, in page order.
///
/// Items are appended as received; overlapping pages are not deduplicated.
pub async fn collect_all<T, E, F, Fut>(
    parameters: &RequestParameters,
    fetch: F,
) -> Result<Vec<T>, E>
where
    F: FnMut(RequestParameters) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut items = Vec::new();
    fetch_all(parameters, fetch, |page| items.extend(page)).await?;
    Ok(items)
}

/// Fetches exactly one page and wraps it for navigation.
pub async fn fetch_page<T, E>(
    fetcher: PageFetcher<T, E>,
    parameters: RequestParameters,
) -> Result<Paginated<T, E>, E> {
    let page = fetcher(parameters.clone()).await?;
    Ok(Paginated {
        items: page.items,
        parameters,
        pagination: page.pagination,
        fetcher,
    })
}

/// One page of a collection, plus what is needed to fetch other pages.
///
/// A `Paginated` is never modified: navigating returns a new value built
/// from the same parameters with only the page number changed, so several
/// holders may navigate from the same page independently.
pub struct Paginated<T, E> {
    items: Vec<T>,
    parameters: RequestParameters,
    pagination: PaginationMeta,
    fetcher: PageFetcher<T, E>,
}

impl<T, E> Paginated<T, E> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The parameters that produced this page.
    pub fn parameters(&self) -> &RequestParameters {
        &self.parameters
    }

    pub fn pagination(&self) -> &PaginationMeta {
        &self.pagination
    }

    /// The page that was requested, defaulting to 1 when unset.
    pub fn current_page(&self) -> u32 {
        self.parameters.page().unwrap_or(1)
    }

    /// Total pages reported by the server; at least 1.
    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages.max(1)
    }

    /// Total items across all pages reported by the server.
    pub fn total_items(&self) -> u64 {
        self.pagination.total
    }

    pub fn is_final_page(&self) -> bool {
        self.current_page() >= self.pagination.total_pages
    }

    pub async fn first_page(&self) -> Result<Self, E> {
        self.fetch(1).await
    }

    pub async fn last_page(&self) -> Result<Self, E> {
        self.fetch(self.total_pages()).await
    }

    /// Fetches the following page, or `None` without a request when this is the last one.
    pub async fn next_page(&self) -> Result<Option<Self>, E> {
        if self.is_final_page() {
            return Ok(None);
        }
        self.fetch(self.current_page() + 1).await.map(Some)
    }

    /// Fetches the preceding page, or `None` without a request on page 1.
    pub async fn previous_page(&self) -> Result<Option<Self>, E> {
        if self.current_page() <= 1 {
            return Ok(None);
        }
        self.fetch(self.current_page() - 1).await.map(Some)
    }

    async fn fetch(&self, page: u32) -> Result<Self, E> {
        fetch_page(
            Arc::clone(&self.fetcher),
            self.parameters.clone().with_page(page),
        )
        .await
    }
}

impl<T: std::fmt::Debug, E> std::fmt::Debug for Paginated<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginated")
            .field("items", &self.items)
            .field("parameters", &self.parameters)
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}
