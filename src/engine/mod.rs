//! Pagination engine
//!
//! Drives a [`PageSource`] across a cursor-paginated result set and
//! accumulates the full roster of linkage records. The engine owns all
//! pagination state; the source is stateless per call.
//!
//! # Overview
//!
//! The loop is strictly sequential: each fetch must complete before the
//! next cursor is known, so there is no parallel fetch path. A single
//! transport or shape failure aborts the whole collection; there is no
//! partial-success mode.

use crate::error::Result;
use crate::types::{LinkageRecord, Page};
use async_trait::async_trait;
use tracing::{debug, warn};


/// A source of identity pages, one fetch per cursor position.
///
/// Implemented by the production GraphQL executor; test doubles implement
/// it over canned pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `cursor`, or the first page when `None`.
    ///
    /// `cursor` must be a value previously returned as `end_cursor` by this
    /// source; provenance is not validated here.
    async fn execute(&self, cursor: Option<&str>) -> Result<Page>;
}

/// Accumulation state across pages
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    /// Cursor for the next fetch; `None` means "first page"
    pub cursor: Option<String>,
    /// Whether the final page has been absorbed
    pub done: bool,
    /// Records accumulated so far, in server-returned order
    pub results: Vec<LinkageRecord>,
}

impl FetchState {
    /// Create a fresh state positioned at the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one fetched page into the accumulation.
    ///
    /// Records are appended in server order, never deduplicated. The final
    /// page's `end_cursor` is discarded along with the page itself.
    pub fn absorb(&mut self, page: Page) {
        self.results.extend(page.records);
        if page.has_next_page {
            self.cursor = page.end_cursor;
        } else {
            self.done = true;
        }
    }
}

/// Drives a [`PageSource`] until the server reports no further pages
pub struct RosterEngine<S> {
    source: S,
}

impl<S: PageSource> RosterEngine<S> {
    /// Create an engine over a page source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Collect every linkage record, in server order, across all pages.
    ///
    /// Terminates after the first page reporting `has_next_page = false`.
    /// Any failure aborts immediately; records gathered before the failure
    /// are dropped (their count is logged for diagnostics).
    pub async fn collect_all(&self) -> Result<Vec<LinkageRecord>> {
        let mut state = FetchState::new();
        let mut page_count = 0u32;

        while !state.done {
            let page = match self.source.execute(state.cursor.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        pages = page_count,
                        partial_records = state.results.len(),
                        "aborting collection: {e}"
                    );
                    return Err(e);
                }
            };

            page_count += 1;
            debug!(
                page = page_count,
                records = page.len(),
                has_next = page.has_next_page,
                "fetched page"
            );

            state.absorb(page);
        }

        debug!(pages = page_count, records = state.results.len(), "collection complete");
        Ok(state.results)
    }
}
