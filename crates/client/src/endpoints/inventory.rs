//! Inventory counting endpoints.

use tillpoint_core::StoreId;

use crate::dto::{
    AdjustVariantAck, AdjustVariantRequest, CompareCountRequest, CompareCountResponse,
    CountedPair, SystemCountPage,
};
use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// Fetch one page of the system count for a store.
    ///
    /// `count` in the response is the server's total for the query, not
    /// the page length; callers overwrite their local total from it on
    /// every page.
    pub async fn get_system_count(
        &self,
        store_id: StoreId,
        search: Option<&str>,
        limit: u32,
        offset: u64,
    ) -> Result<SystemCountPage, ApiError> {
        let mut query = vec![
            ("store_id", store_id.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(term) = search {
            if !term.is_empty() {
                query.push(("search", term.to_string()));
            }
        }
        self.get_json("/inventory/system-count", &query).await
    }

    /// Send the full entered count for classification.
    ///
    /// The server computes `delta` and `status`; the client treats both
    /// as authoritative.
    pub async fn compare_count(
        &self,
        store_id: StoreId,
        items: Vec<CountedPair>,
    ) -> Result<CompareCountResponse, ApiError> {
        let body = CompareCountRequest { store_id, items };
        self.post_json("/inventory/compare-count", &body).await
    }

    /// Apply a single stock adjustment. The batch runner calls this once
    /// per non-matching row, strictly in sequence.
    pub async fn adjust_variant(
        &self,
        request: &AdjustVariantRequest,
    ) -> Result<AdjustVariantAck, ApiError> {
        self.post_json("/inventory/adjustments", request).await
    }
}
