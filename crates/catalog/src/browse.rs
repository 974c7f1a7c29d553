//! Paged catalog browsing.

use tillpoint_client::dto::ProductRow;
use tillpoint_client::{ApiClient, ApiError};
use tillpoint_core::StoreId;

/// Offset-paged product list for one store.
///
/// A new search replaces the list at offset 0; `load_more` appends the
/// next page. The server's total is trusted on every page. A failed
/// fetch leaves the current list intact.
pub struct CatalogBrowser {
    client: ApiClient,
    store_id: StoreId,
    query: String,
    page: u64,
    products: Vec<ProductRow>,
    total_count: u64,
}

impl CatalogBrowser {
    pub fn new(client: ApiClient, store_id: StoreId) -> Self {
        Self {
            client,
            store_id,
            query: String::new(),
            page: 0,
            products: Vec::new(),
            total_count: 0,
        }
    }

    pub fn products(&self) -> &[ProductRow] {
        &self.products
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn has_more(&self) -> bool {
        (self.products.len() as u64) < self.total_count
    }

    /// Fresh search at offset 0.
    pub async fn search(&mut self, term: &str) -> Result<(), ApiError> {
        let limit = self.client.config().page_size;
        let page = self
            .client
            .search_products(self.store_id, Some(term), limit, 0)
            .await?;

        self.query = term.to_string();
        self.page = 0;
        self.total_count = page.count;
        self.products = page.items;
        Ok(())
    }

    /// Append the next page at `offset = page * page_size`.
    pub async fn load_more(&mut self) -> Result<(), ApiError> {
        let limit = self.client.config().page_size;
        let next_page = self.page + 1;
        let offset = next_page * limit as u64;

        let page = self
            .client
            .search_products(self.store_id, Some(&self.query), limit, offset)
            .await?;

        self.page = next_page;
        self.total_count = page.count;
        self.products.extend(page.items);
        Ok(())
    }

    /// Switch stores and drop the loaded list; stock is store-scoped.
    pub fn set_store(&mut self, store_id: StoreId) {
        self.store_id = store_id;
        self.query.clear();
        self.page = 0;
        self.products.clear();
        self.total_count = 0;
    }
}
