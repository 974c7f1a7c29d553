//! Transfer request building and submission.

use thiserror::Error;

use tillpoint_client::dto::{CreateTransferRequest, TransferLine, TransferStatus, TransferView};
use tillpoint_client::{ApiClient, ApiError};
use tillpoint_core::{DomainError, DomainResult, StoreId, VariantId};

#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl TransferError {
    pub fn user_message(&self) -> String {
        match self {
            TransferError::Api(err) => err.user_message(),
            TransferError::Domain(err) => err.to_string(),
        }
    }
}

/// A transfer request under construction.
///
/// Source and destination must differ and every line needs a positive
/// quantity; quantities for the same variant accumulate.
#[derive(Debug, Clone)]
pub struct TransferDraft {
    from_store_id: StoreId,
    to_store_id: StoreId,
    lines: Vec<TransferLine>,
}

impl TransferDraft {
    pub fn new(from_store_id: StoreId, to_store_id: StoreId) -> DomainResult<Self> {
        if from_store_id == to_store_id {
            return Err(DomainError::validation(
                "source and destination store must differ",
            ));
        }
        Ok(Self {
            from_store_id,
            to_store_id,
            lines: Vec::new(),
        })
    }

    pub fn lines(&self) -> &[TransferLine] {
        &self.lines
    }

    pub fn add_line(&mut self, variant_id: VariantId, quantity: u64) -> DomainResult<u64> {
        if quantity == 0 {
            return Err(DomainError::validation("transfer quantity must be positive"));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.variant_id == variant_id) {
            line.quantity += quantity;
            return Ok(line.quantity);
        }

        self.lines.push(TransferLine {
            variant_id,
            quantity,
        });
        Ok(quantity)
    }

    pub fn remove_line(&mut self, variant_id: VariantId) {
        self.lines.retain(|l| l.variant_id != variant_id);
    }

    fn build(self) -> DomainResult<CreateTransferRequest> {
        if self.lines.is_empty() {
            return Err(DomainError::validation("transfer has no lines"));
        }
        Ok(CreateTransferRequest {
            from_store_id: self.from_store_id,
            to_store_id: self.to_store_id,
            lines: self.lines,
        })
    }

    /// Submit the request; the server answers with the initial view
    /// (normally `pending`).
    pub async fn submit(self, client: &ApiClient) -> Result<TransferView, TransferError> {
        let request = self.build()?;
        let view = client.create_transfer(&request).await?;
        tracing::info!(
            transfer_id = %view.transfer_id,
            from = %view.from_store_id,
            to = %view.to_store_id,
            status = ?view.status,
            "transfer requested"
        );
        Ok(view)
    }
}

/// Can this transfer be received at the destination right now?
///
/// Status is server data; this only encodes which statuses the receive
/// button is enabled for.
pub fn receivable(view: &TransferView) -> bool {
    matches!(
        view.status,
        TransferStatus::Approved | TransferStatus::InTransit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_store_transfer_is_refused() {
        let store = StoreId::new();
        assert!(matches!(
            TransferDraft::new(store, store),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn zero_quantity_line_is_refused() {
        let mut draft = TransferDraft::new(StoreId::new(), StoreId::new()).unwrap();
        assert!(draft.add_line(VariantId::new(), 0).is_err());
    }

    #[test]
    fn duplicate_variant_lines_accumulate() {
        let mut draft = TransferDraft::new(StoreId::new(), StoreId::new()).unwrap();
        let id = VariantId::new();
        draft.add_line(id, 2).unwrap();
        assert_eq!(draft.add_line(id, 3).unwrap(), 5);
        assert_eq!(draft.lines().len(), 1);
    }

    #[test]
    fn empty_draft_cannot_be_built() {
        let draft = TransferDraft::new(StoreId::new(), StoreId::new()).unwrap();
        assert!(matches!(draft.build(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn receive_is_enabled_for_approved_and_in_transit_only() {
        use chrono::Utc;
        use tillpoint_core::TransferId;

        let mut view = TransferView {
            transfer_id: TransferId::new(),
            from_store_id: StoreId::new(),
            to_store_id: StoreId::new(),
            status: TransferStatus::Pending,
            lines: Vec::new(),
            created_at: Utc::now(),
        };

        assert!(!receivable(&view));
        view.status = TransferStatus::Approved;
        assert!(receivable(&view));
        view.status = TransferStatus::InTransit;
        assert!(receivable(&view));
        view.status = TransferStatus::Received;
        assert!(!receivable(&view));
        view.status = TransferStatus::Cancelled;
        assert!(!receivable(&view));
    }
}
