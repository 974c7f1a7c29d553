//! Comparator caller: hand the whole sheet to the server, keep the
//! classified result verbatim.

use tillpoint_client::dto::{ComparisonRow, ComparisonStatus, ComparisonSummary};
use tillpoint_client::ApiClient;
use tillpoint_core::{DomainError, StoreId};

use crate::error::CountError;
use crate::sheet::CountSheet;

/// The server's classified comparison, held read-only.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub rows: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
}

impl ComparisonOutcome {
    /// Rows needing an adjustment: everything the server did not mark
    /// MATCH. This is a filter, not a reclassification.
    pub fn discrepancies(&self) -> Vec<ComparisonRow> {
        self.rows
            .iter()
            .filter(|row| row.status != ComparisonStatus::Match)
            .cloned()
            .collect()
    }

    /// Number of rows shown on the discrepancy tab; equals
    /// `summary.short + summary.over` when the server is consistent.
    pub fn discrepancy_count(&self) -> u64 {
        self.summary.short + self.summary.over
    }
}

/// Send the full sheet (zero counts included) for classification.
///
/// An empty sheet is refused locally; the UI prompts the operator
/// instead of calling the comparator with nothing.
pub async fn compare_sheet(
    client: &ApiClient,
    store_id: StoreId,
    sheet: &CountSheet,
) -> Result<ComparisonOutcome, CountError> {
    if sheet.is_empty() {
        return Err(DomainError::validation("no items loaded to compare").into());
    }

    let response = client.compare_count(store_id, sheet.counted_pairs()).await?;

    tracing::info!(
        rows = response.items.len(),
        matched = response.summary.matched,
        short = response.summary.short,
        over = response.summary.over,
        "comparison received"
    );

    Ok(ComparisonOutcome {
        rows: response.items,
        summary: response.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_core::VariantId;

    fn outcome_row(status: ComparisonStatus, delta: i64) -> ComparisonRow {
        ComparisonRow {
            variant_id: VariantId::new(),
            sku: None,
            product_name: "P".to_string(),
            variant_name: None,
            system_qty: 10,
            physical_qty: (10 + delta).max(0) as u64,
            delta,
            status,
        }
    }

    #[test]
    fn discrepancies_exclude_exactly_the_match_rows() {
        let outcome = ComparisonOutcome {
            rows: vec![
                outcome_row(ComparisonStatus::Match, 0),
                outcome_row(ComparisonStatus::Short, -2),
                outcome_row(ComparisonStatus::Over, 3),
                outcome_row(ComparisonStatus::Match, 0),
            ],
            summary: ComparisonSummary {
                matched: 2,
                short: 1,
                over: 1,
                delta_total: 1,
            },
        };

        let discrepancies = outcome.discrepancies();
        assert_eq!(discrepancies.len(), 2);
        assert!(discrepancies.iter().all(|r| r.status != ComparisonStatus::Match));
        assert_eq!(outcome.discrepancy_count() as usize, discrepancies.len());
    }

    #[test]
    fn status_is_trusted_even_when_delta_disagrees() {
        // The delta-sign mapping is a server detail; a row the server
        // calls MATCH is filtered out regardless of its delta.
        let outcome = ComparisonOutcome {
            rows: vec![outcome_row(ComparisonStatus::Match, -1)],
            summary: ComparisonSummary {
                matched: 1,
                short: 0,
                over: 0,
                delta_total: -1,
            },
        };
        assert!(outcome.discrepancies().is_empty());
    }
}
