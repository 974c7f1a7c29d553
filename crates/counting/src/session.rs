//! Count session state machine.
//!
//! ```text
//! Idle --search--> Loaded --edit qty--> Counted --compare--> Compared
//! Compared --apply adjustments--> Applying --done--> Idle (fresh fetch)
//! any state --reset--> Idle
//! ```
//!
//! Nothing survives a process restart: an interrupted `Applying` phase
//! leaves the already-applied adjustments committed server-side (each
//! call is independent) and everything else is gone.

use tillpoint_client::ApiClient;
use tillpoint_core::{DomainError, StoreId, VariantId};

use crate::adjust::{AdjustmentResult, AdjustmentRunner};
use crate::compare::{ComparisonOutcome, compare_sheet};
use crate::error::CountError;
use crate::search::{LoadedPage, SearchController};
use crate::sheet::CountSheet;

/// Where a count session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loaded,
    Counted,
    Compared,
    Applying,
}

/// One store's count session: search, sheet, comparison, adjustment.
pub struct CountSession {
    client: ApiClient,
    store_id: StoreId,
    controller: SearchController,
    sheet: CountSheet,
    comparison: Option<ComparisonOutcome>,
    phase: SessionPhase,
}

impl CountSession {
    pub fn new(client: ApiClient, store_id: StoreId) -> Self {
        let controller = SearchController::new(client.clone(), store_id);
        Self {
            client,
            store_id,
            controller,
            sheet: CountSheet::new(),
            comparison: None,
            phase: SessionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn sheet(&self) -> &CountSheet {
        &self.sheet
    }

    pub fn comparison(&self) -> Option<&ComparisonOutcome> {
        self.comparison.as_ref()
    }

    pub fn total_count(&self) -> u64 {
        self.controller.total_count()
    }

    /// More pages available server-side?
    pub fn has_more(&self) -> bool {
        (self.sheet.len() as u64) < self.controller.total_count()
    }

    fn apply_page(&mut self, page: LoadedPage) {
        if page.replace {
            self.sheet.replace(page.items);
            self.comparison = None;
        } else {
            self.sheet.append(page.items);
        }
    }

    /// Initial page-0 load for the current query, no debounce.
    pub async fn load(&mut self) -> Result<(), CountError> {
        if let Some(page) = self.controller.refresh().await? {
            self.apply_page(page);
            self.phase = SessionPhase::Loaded;
        }
        Ok(())
    }

    /// Debounced search. Returns `true` if this submission was applied,
    /// `false` if it was superseded by a later one.
    pub async fn search(&mut self, term: &str) -> Result<bool, CountError> {
        match self.controller.submit_query(term).await? {
            Some(page) => {
                self.apply_page(page);
                self.phase = SessionPhase::Loaded;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Append the next page. Entered quantities on loaded rows survive.
    pub async fn load_more(&mut self) -> Result<(), CountError> {
        if self.phase == SessionPhase::Idle {
            return Err(DomainError::invariant("load-more before first load").into());
        }
        if let Some(page) = self.controller.load_more().await? {
            self.apply_page(page);
        }
        Ok(())
    }

    /// Record an entered physical quantity (clamped to >= 0).
    ///
    /// Editing after a comparison drops the comparison; the sheet no
    /// longer matches what the server classified.
    pub fn enter_quantity(&mut self, variant_id: VariantId, qty: i64) -> Result<u64, CountError> {
        match self.phase {
            SessionPhase::Idle => {
                return Err(DomainError::invariant("no count loaded").into());
            }
            SessionPhase::Applying => {
                return Err(DomainError::invariant("adjustments in progress").into());
            }
            _ => {}
        }

        let stored = self.sheet.update_quantity(variant_id, qty)?;
        self.comparison = None;
        self.phase = SessionPhase::Counted;
        Ok(stored)
    }

    /// Send the sheet for classification and hold the result.
    pub async fn compare(&mut self) -> Result<&ComparisonOutcome, CountError> {
        match self.phase {
            SessionPhase::Loaded | SessionPhase::Counted | SessionPhase::Compared => {}
            _ => return Err(DomainError::invariant("nothing to compare").into()),
        }

        let outcome = compare_sheet(&self.client, self.store_id, &self.sheet).await?;
        self.comparison = Some(outcome);
        self.phase = SessionPhase::Compared;
        Ok(self.comparison.as_ref().unwrap())
    }

    /// Apply all non-matching rows sequentially, then refresh page 0 and
    /// reset to `Idle`.
    ///
    /// The batch itself never aborts; per-row failures come back in the
    /// results. A failed post-batch refresh is logged and the session
    /// still resets; the adjustments are already committed server-side.
    pub async fn apply_adjustments(
        &mut self,
        progress: impl FnMut(usize, usize),
    ) -> Result<Vec<AdjustmentResult>, CountError> {
        if self.phase != SessionPhase::Compared {
            return Err(DomainError::invariant("no comparison to apply").into());
        }
        let Some(comparison) = self.comparison.take() else {
            return Err(DomainError::invariant("no comparison to apply").into());
        };

        self.phase = SessionPhase::Applying;
        let discrepancies = comparison.discrepancies();
        let runner = AdjustmentRunner::new(self.client.clone());
        let results = runner.apply(self.store_id, &discrepancies, progress).await;

        match self.controller.refresh().await {
            Ok(Some(page)) => {
                self.sheet.replace(page.items);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "post-adjustment refresh failed");
                self.sheet.clear();
            }
        }

        self.comparison = None;
        self.phase = SessionPhase::Idle;
        Ok(results)
    }

    /// Abandon the session: drop the sheet and comparison, discard
    /// anything in flight.
    pub fn reset(&mut self) {
        self.controller.set_store(self.store_id);
        self.sheet.clear();
        self.comparison = None;
        self.phase = SessionPhase::Idle;
    }

    /// Move the session to another store. Equivalent to a reset with a
    /// new store scope.
    pub fn set_store(&mut self, store_id: StoreId) {
        self.store_id = store_id;
        self.controller.set_store(store_id);
        self.sheet.clear();
        self.comparison = None;
        self.phase = SessionPhase::Idle;
    }
}
