//! Item-by-item iteration over paged collection responses.
//!
//! The iterator never performs I/O itself. Callers supply a [`PageSource`]
//! that turns an `@odata.nextLink` into the next [`CollectionResponse`]; the
//! iterator drains each page, follows links until none remain, and keeps the
//! delta link from the final page.
//!
//! ```ignore
//! let mut users = PageIterator::new(first_page, client);
//! users
//!     .iterate(|user| {
//!         println!("{:?}", user.display_name);
//!         true
//!     })
//!     .await?;
//! let resume_from = users.delta_link();
//! ```

use std::collections::{HashSet, VecDeque};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{CollectionResponse, ModelError, Result};

/// Fetches the page behind a next link.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// # Errors
    ///
    /// Implementations should wrap transport failures with
    /// [`ModelError::page_fetch`].
    async fn fetch_page(&self, link: &str) -> Result<CollectionResponse<T>>;
}

/// Walks every item of a paged collection, fetching pages on demand.
pub struct PageIterator<T, S> {
    source: S,
    buffered: VecDeque<T>,
    next_link: Option<String>,
    delta_link: Option<String>,
    visited: HashSet<String>,
    pages_fetched: usize,
    max_pages: Option<usize>,
}

impl<T, S> PageIterator<T, S>
where
    T: Send,
    S: PageSource<T>,
{
    /// Starts iterating from an already retrieved first page.
    pub fn new(first_page: CollectionResponse<T>, source: S) -> Self {
        let mut iterator = Self {
            source,
            buffered: VecDeque::new(),
            next_link: None,
            delta_link: None,
            visited: HashSet::new(),
            pages_fetched: 0,
            max_pages: None,
        };
        iterator.absorb(first_page);
        iterator
    }

    /// Stops following next links after `max_pages` additional pages.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Returns the next item, fetching pages as needed. Empty pages are
    /// skipped.
    ///
    /// # Errors
    ///
    /// - Any error returned by the page source
    /// - [`ModelError::PagingLoop`] if a next link names a page already fetched
    pub async fn next_item(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Ok(Some(item));
            }

            let Some(link) = self.next_link.take() else {
                return Ok(None);
            };

            if let Some(max_pages) = self.max_pages
                && self.pages_fetched >= max_pages
            {
                debug!(max_pages, "page limit reached, leaving next link unfollowed");
                self.next_link = Some(link);
                return Ok(None);
            }

            let page = self.source.fetch_page(&link).await?;
            self.pages_fetched += 1;
            debug!(
                link = %link,
                items = page.items().len(),
                pages_fetched = self.pages_fetched,
                "fetched page"
            );

            self.visited.insert(link);
            if let Some(next) = page.next_link()
                && self.visited.contains(next)
            {
                warn!(link = %next, "next link points back to a fetched page");
                return Err(ModelError::PagingLoop {
                    link: next.to_owned(),
                });
            }

            self.absorb(page);
        }
    }

    /// Feeds items to `callback` until it returns `false` or the collection is
    /// exhausted. Iteration can be resumed by calling this again.
    ///
    /// # Errors
    ///
    /// Same as [`next_item`](Self::next_item).
    pub async fn iterate<F>(&mut self, mut callback: F) -> Result<()>
    where
        F: FnMut(T) -> bool + Send,
    {
        while let Some(item) = self.next_item().await? {
            if !callback(item) {
                break;
            }
        }
        Ok(())
    }

    /// Link to the next unfetched page, if any.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Delta link captured from the last page.
    pub fn delta_link(&self) -> Option<&str> {
        self.delta_link.as_deref()
    }

    /// Pages fetched through the source, not counting the first page.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    fn absorb(&mut self, mut page: CollectionResponse<T>) {
        self.next_link = page.pagination.odata_next_link.take();
        if self.next_link.is_none() {
            self.delta_link = page.delta_link().map(str::to_owned);
        }
        self.buffered.extend(page.into_items());
    }
}
