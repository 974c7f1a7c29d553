//! Sequential adjustment batch runner.
//!
//! One remote call per non-matching row, strictly in order: row *i+1*
//! is not dispatched until row *i* resolved. That keeps the progress
//! counter monotonic and bounds concurrent load on the adjustment
//! endpoint. The batch is best-effort, not a transaction: a failed row
//! is recorded and the runner moves on.

use std::time::Duration;

use tillpoint_client::dto::{AdjustVariantRequest, ComparisonRow};
use tillpoint_client::ApiClient;
use tillpoint_core::{StoreId, VariantId};

/// Outcome of one adjustment call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustmentOutcome {
    Success,
    Error(String),
}

/// Per-row record produced incrementally as the batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentResult {
    pub variant_id: VariantId,
    pub outcome: AdjustmentOutcome,
}

impl AdjustmentResult {
    pub fn is_success(&self) -> bool {
        self.outcome == AdjustmentOutcome::Success
    }
}

/// Applies a discrepancy set one call at a time.
pub struct AdjustmentRunner {
    client: ApiClient,
    pacing: Duration,
}

impl AdjustmentRunner {
    pub fn new(client: ApiClient) -> Self {
        let pacing = client.config().adjust_pacing;
        Self { client, pacing }
    }

    /// Apply all rows, invoking `progress(current, total)` after each
    /// one with `current` running 1..=N.
    ///
    /// Never fails as a whole: per-row errors land in the returned
    /// results and the batch keeps going.
    pub async fn apply(
        &self,
        store_id: StoreId,
        rows: &[ComparisonRow],
        mut progress: impl FnMut(usize, usize),
    ) -> Vec<AdjustmentResult> {
        let total = rows.len();
        let mut results = Vec::with_capacity(total);

        for (index, row) in rows.iter().enumerate() {
            if index > 0 && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }

            let request = AdjustVariantRequest {
                store_id,
                variant_id: row.variant_id,
                system_qty: row.system_qty,
                physical_qty: row.physical_qty,
                delta: row.delta,
            };

            let outcome = match self.client.adjust_variant(&request).await {
                Ok(ack) => {
                    tracing::debug!(
                        variant_id = %ack.variant_id,
                        new_system_qty = ack.new_system_qty,
                        "adjustment applied"
                    );
                    AdjustmentOutcome::Success
                }
                Err(err) => {
                    tracing::warn!(variant_id = %row.variant_id, error = %err, "adjustment failed");
                    AdjustmentOutcome::Error(err.user_message())
                }
            };

            results.push(AdjustmentResult {
                variant_id: row.variant_id,
                outcome,
            });
            progress(index + 1, total);
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        tracing::info!(
            applied = total - failed,
            failed,
            "adjustment batch finished"
        );

        results
    }
}
