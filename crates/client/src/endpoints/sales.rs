//! Sales endpoints: checkout, cart drafts, returns.

use tillpoint_core::{DraftId, StoreId};

use crate::dto::{
    CheckoutRequest, CreateReturnRequest, DraftDto, DraftList, Receipt, ReturnConfirmation,
    SaveDraftRequest,
};
use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// Submit a cart for checkout. Atomicity is server-side; on any
    /// error the cart is left untouched client-side.
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<Receipt, ApiError> {
        self.post_json("/sales/checkout", request).await
    }

    /// Persist a cart snapshot server-side.
    pub async fn save_draft(&self, request: &SaveDraftRequest) -> Result<DraftDto, ApiError> {
        self.post_json("/sales/drafts", request).await
    }

    /// List saved drafts for a store.
    pub async fn list_drafts(&self, store_id: StoreId) -> Result<DraftList, ApiError> {
        self.get_json("/sales/drafts", &[("store_id", store_id.to_string())])
            .await
    }

    /// Delete a saved draft.
    pub async fn delete_draft(&self, draft_id: DraftId) -> Result<(), ApiError> {
        self.delete(&format!("/sales/drafts/{}", draft_id)).await
    }

    /// Submit a product return against a receipt.
    pub async fn create_return(
        &self,
        request: &CreateReturnRequest,
    ) -> Result<ReturnConfirmation, ApiError> {
        self.post_json("/sales/returns", request).await
    }
}
