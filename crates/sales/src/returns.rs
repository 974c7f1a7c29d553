//! Product returns against a receipt.

use tillpoint_client::dto::{CreateReturnRequest, Receipt, ReturnConfirmation, ReturnLine};
use tillpoint_client::ApiClient;
use tillpoint_core::{DomainError, DomainResult, VariantId, clamp_to_ceiling};

use crate::error::SalesError;

/// Builds a return from a receipt, line by line.
///
/// Per-line quantities are clamped to the quantity actually sold on the
/// receipt; refund amounts are computed server-side.
#[derive(Debug, Clone)]
pub struct ReturnBuilder {
    receipt: Receipt,
    lines: Vec<ReturnLine>,
}

impl ReturnBuilder {
    pub fn new(receipt: Receipt) -> Self {
        Self {
            receipt,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[ReturnLine] {
        &self.lines
    }

    fn sold_quantity(&self, variant_id: VariantId) -> Option<u64> {
        self.receipt
            .lines
            .iter()
            .find(|l| l.variant_id == variant_id)
            .map(|l| l.quantity)
    }

    /// Set the return quantity for a sold variant, clamped to
    /// `[0, sold]`. Zero removes the line. Variants not on the receipt
    /// are refused.
    pub fn set_quantity(&mut self, variant_id: VariantId, qty: i64) -> DomainResult<u64> {
        let Some(sold) = self.sold_quantity(variant_id) else {
            return Err(DomainError::not_found());
        };

        let stored = clamp_to_ceiling(qty, sold);
        self.lines.retain(|l| l.variant_id != variant_id);
        if stored > 0 {
            self.lines.push(ReturnLine {
                variant_id,
                quantity: stored,
            });
        }
        Ok(stored)
    }

    /// Finish the builder into a wire request. Empty returns are
    /// refused locally.
    pub fn build(self, reason: Option<String>) -> DomainResult<CreateReturnRequest> {
        if self.lines.is_empty() {
            return Err(DomainError::validation("no lines selected for return"));
        }
        Ok(CreateReturnRequest {
            receipt_id: self.receipt.receipt_id,
            lines: self.lines,
            reason,
        })
    }

    /// Build and submit in one go.
    pub async fn submit(
        self,
        client: &ApiClient,
        reason: Option<String>,
    ) -> Result<ReturnConfirmation, SalesError> {
        let request = self.build(reason)?;
        let confirmation = client.create_return(&request).await?;
        tracing::info!(
            receipt_id = %confirmation.receipt_id,
            refunded_total = confirmation.refunded_total,
            "return accepted"
        );
        Ok(confirmation)
    }
}
