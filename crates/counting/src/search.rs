//! Debounced, paginated system-count search.
//!
//! Every state-changing entry point is guarded by a generation counter:
//! submitting a query bumps the generation, and a fetch only applies if
//! the generation is unchanged both after the debounce window *and*
//! after the response arrives. That closes the classic race where a
//! slow response for a superseded query overwrites newer results.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tillpoint_client::ApiClient;
use tillpoint_core::StoreId;

use crate::error::CountError;
use crate::model::CountableItem;

/// A successfully fetched page, ready to apply to the sheet.
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub items: Vec<CountableItem>,
    /// Server's total row count for the query. Overwrites any local
    /// total; the server is trusted, not reconciled against.
    pub total_count: u64,
    /// True for a fresh query (replace the sheet), false for "load
    /// more" (append).
    pub replace: bool,
}

#[derive(Debug)]
struct SearchState {
    store_id: StoreId,
    query: String,
    /// Last fully loaded page index (0-based).
    page: u64,
    total_count: u64,
}

/// Search/pagination controller for the count workflow.
///
/// Methods take `&self`; internal state is interior-mutable so a burst
/// of query submissions can race and resolve via the generation
/// counter. Locks are never held across an await.
pub struct SearchController {
    client: ApiClient,
    state: Mutex<SearchState>,
    generation: AtomicU64,
}

impl SearchController {
    pub fn new(client: ApiClient, store_id: StoreId) -> Self {
        Self {
            client,
            state: Mutex::new(SearchState {
                store_id,
                query: String::new(),
                page: 0,
                total_count: 0,
            }),
            generation: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn total_count(&self) -> u64 {
        self.lock().total_count
    }

    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    /// Switch stores: resets the query and pagination and invalidates
    /// everything in flight. The caller reloads via [`refresh`].
    ///
    /// [`refresh`]: SearchController::refresh
    pub fn set_store(&self, store_id: StoreId) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        state.store_id = store_id;
        state.query.clear();
        state.page = 0;
        state.total_count = 0;
    }

    /// Submit a search term, debounced.
    ///
    /// Waits out the configured inactivity window; if another submission
    /// arrived meanwhile this one returns `Ok(None)` without issuing a
    /// request. A request that does go out is discarded the same way if
    /// it is stale by the time the response lands. On failure the
    /// controller state is untouched, so the previous list stays valid.
    pub async fn submit_query(&self, term: &str) -> Result<Option<LoadedPage>, CountError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.client.config().debounce).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(%term, "query superseded within debounce window");
            return Ok(None);
        }

        let (store_id, limit) = {
            let state = self.lock();
            (state.store_id, self.client.config().page_size)
        };

        let page = self
            .client
            .get_system_count(store_id, Some(term), limit, 0)
            .await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(%term, "stale response discarded");
            return Ok(None);
        }

        let mut state = self.lock();
        state.query = term.to_string();
        state.page = 0;
        state.total_count = page.count;

        Ok(Some(LoadedPage {
            items: page.items.into_iter().map(CountableItem::from_row).collect(),
            total_count: page.count,
            replace: true,
        }))
    }

    /// Immediate page-0 fetch with the current query (initial load and
    /// the refresh after adjustments). Supersedes any pending debounce.
    pub async fn refresh(&self) -> Result<Option<LoadedPage>, CountError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (store_id, query, limit) = {
            let state = self.lock();
            (state.store_id, state.query.clone(), self.client.config().page_size)
        };

        let page = self
            .client
            .get_system_count(store_id, Some(&query), limit, 0)
            .await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            return Ok(None);
        }

        let mut state = self.lock();
        state.page = 0;
        state.total_count = page.count;

        Ok(Some(LoadedPage {
            items: page.items.into_iter().map(CountableItem::from_row).collect(),
            total_count: page.count,
            replace: true,
        }))
    }

    /// Fetch the next page at `offset = page * page_size` and hand it
    /// back for appending. Discarded if the query changed while the
    /// request was in flight.
    pub async fn load_more(&self) -> Result<Option<LoadedPage>, CountError> {
        let generation = self.generation.load(Ordering::SeqCst);

        let (store_id, query, next_page, limit) = {
            let state = self.lock();
            (
                state.store_id,
                state.query.clone(),
                state.page + 1,
                self.client.config().page_size,
            )
        };

        let offset = next_page * limit as u64;
        let page = self
            .client
            .get_system_count(store_id, Some(&query), limit, offset)
            .await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("load-more response discarded after query change");
            return Ok(None);
        }

        let mut state = self.lock();
        state.page = next_page;
        state.total_count = page.count;

        Ok(Some(LoadedPage {
            items: page.items.into_iter().map(CountableItem::from_row).collect(),
            total_count: page.count,
            replace: false,
        }))
    }
}
