//! Catalog endpoints: product search and signed image URLs.

use tillpoint_core::{StoreId, VariantId};

use crate::dto::{ProductPage, SignedImageUrl};
use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// Fetch one page of products (with variants and per-store stock).
    pub async fn search_products(
        &self,
        store_id: StoreId,
        search: Option<&str>,
        limit: u32,
        offset: u64,
    ) -> Result<ProductPage, ApiError> {
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
        self.get_json("/catalog/products", &query).await
    }

    /// Fetch a signed, time-limited image URL for a variant.
    pub async fn variant_image_url(
        &self,
        variant_id: VariantId,
    ) -> Result<SignedImageUrl, ApiError> {
        self.get_json(&format!("/catalog/variants/{}/image-url", variant_id), &[])
            .await
    }
}
