//! Store-transfer endpoints.

use tillpoint_core::{StoreId, TransferId};

use crate::dto::{CreateTransferRequest, TransferList, TransferView};
use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// Request a transfer between two stores. The approval state machine
    /// runs server-side; the response carries the initial status.
    pub async fn create_transfer(
        &self,
        request: &CreateTransferRequest,
    ) -> Result<TransferView, ApiError> {
        self.post_json("/transfers", request).await
    }

    /// List transfers touching a store (either direction).
    pub async fn list_transfers(&self, store_id: StoreId) -> Result<TransferList, ApiError> {
        self.get_json("/transfers", &[("store_id", store_id.to_string())])
            .await
    }

    /// Confirm receipt of an in-transit transfer at the destination.
    pub async fn receive_transfer(&self, transfer_id: TransferId) -> Result<TransferView, ApiError> {
        self.post_json(&format!("/transfers/{}/receive", transfer_id), &())
            .await
    }
}
