//! Cart drafts: saved-for-later snapshots.
//!
//! Drafts live server-side; when the network is down they land in a
//! local store instead, so a till can keep parking carts offline. The
//! fallback is best-effort; local drafts are not synced back.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use tillpoint_client::dto::{DraftDto, SaveDraftRequest};
use tillpoint_client::ApiClient;
use tillpoint_core::{DraftId, StoreId};

use crate::error::SalesError;

/// Where a draft ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftLocation {
    Remote,
    Local,
}

/// Storage seam for drafts.
#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn save(&self, request: SaveDraftRequest) -> Result<DraftDto, SalesError>;
    async fn list(&self, store_id: StoreId) -> Result<Vec<DraftDto>, SalesError>;
    async fn delete(&self, draft_id: DraftId) -> Result<(), SalesError>;
}

/// Server-side draft storage via the API.
pub struct RemoteDraftStore {
    client: ApiClient,
}

impl RemoteDraftStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DraftStore for RemoteDraftStore {
    async fn save(&self, request: SaveDraftRequest) -> Result<DraftDto, SalesError> {
        Ok(self.client.save_draft(&request).await?)
    }

    async fn list(&self, store_id: StoreId) -> Result<Vec<DraftDto>, SalesError> {
        Ok(self.client.list_drafts(store_id).await?.items)
    }

    async fn delete(&self, draft_id: DraftId) -> Result<(), SalesError> {
        Ok(self.client.delete_draft(draft_id).await?)
    }
}

/// In-memory fallback store. Drafts here die with the process.
#[derive(Default)]
pub struct InMemoryDraftStore {
    drafts: Mutex<Vec<DraftDto>>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn save(&self, request: SaveDraftRequest) -> Result<DraftDto, SalesError> {
        let draft = DraftDto {
            draft_id: DraftId::new(),
            store_id: request.store_id,
            name: request.name,
            lines: request.lines,
            saved_at: Utc::now(),
        };
        self.drafts
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(draft.clone());
        Ok(draft)
    }

    async fn list(&self, store_id: StoreId) -> Result<Vec<DraftDto>, SalesError> {
        Ok(self
            .drafts
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .iter()
            .filter(|d| d.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, draft_id: DraftId) -> Result<(), SalesError> {
        self.drafts
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .retain(|d| d.draft_id != draft_id);
        Ok(())
    }
}

/// Remote-first draft handling with local fallback on network failure.
pub struct DraftManager<R: DraftStore, L: DraftStore> {
    remote: R,
    local: L,
}

impl<R: DraftStore, L: DraftStore> DraftManager<R, L> {
    pub fn new(remote: R, local: L) -> Self {
        Self { remote, local }
    }

    /// Save a draft remotely; on a network failure, park it locally.
    /// Non-network failures (validation, auth) surface as-is.
    pub async fn save(
        &self,
        request: SaveDraftRequest,
    ) -> Result<(DraftDto, DraftLocation), SalesError> {
        match self.remote.save(request.clone()).await {
            Ok(draft) => Ok((draft, DraftLocation::Remote)),
            Err(err) if err.is_network() => {
                tracing::warn!(error = %err, "draft save failed, falling back to local store");
                let draft = self.local.save(request).await?;
                Ok((draft, DraftLocation::Local))
            }
            Err(err) => Err(err),
        }
    }

    /// All visible drafts: remote ones (when reachable) plus local
    /// fallbacks.
    pub async fn list(&self, store_id: StoreId) -> Result<Vec<DraftDto>, SalesError> {
        let mut drafts = match self.remote.list(store_id).await {
            Ok(remote) => remote,
            Err(err) if err.is_network() => {
                tracing::warn!(error = %err, "draft listing offline, showing local drafts only");
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        drafts.extend(self.local.list(store_id).await?);
        Ok(drafts)
    }

    /// Delete from both stores; the id only exists in one of them.
    pub async fn delete(&self, draft_id: DraftId) -> Result<(), SalesError> {
        self.local.delete(draft_id).await?;
        match self.remote.delete(draft_id).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_network() => {
                tracing::warn!(error = %err, "remote draft delete failed");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_client::ApiError;
    use tillpoint_client::dto::CheckoutLine;
    use tillpoint_core::VariantId;

    /// Remote store that always fails with a network error.
    struct DeadRemote;

    #[async_trait]
    impl DraftStore for DeadRemote {
        async fn save(&self, _: SaveDraftRequest) -> Result<DraftDto, SalesError> {
            Err(ApiError::Network("connection refused".to_string()).into())
        }
        async fn list(&self, _: StoreId) -> Result<Vec<DraftDto>, SalesError> {
            Err(ApiError::Network("connection refused".to_string()).into())
        }
        async fn delete(&self, _: DraftId) -> Result<(), SalesError> {
            Err(ApiError::Network("connection refused".to_string()).into())
        }
    }

    /// Remote store that rejects with a server error (not network).
    struct RejectingRemote;

    #[async_trait]
    impl DraftStore for RejectingRemote {
        async fn save(&self, _: SaveDraftRequest) -> Result<DraftDto, SalesError> {
            Err(ApiError::Api(422, "draft limit reached".to_string()).into())
        }
        async fn list(&self, _: StoreId) -> Result<Vec<DraftDto>, SalesError> {
            Ok(Vec::new())
        }
        async fn delete(&self, _: DraftId) -> Result<(), SalesError> {
            Ok(())
        }
    }

    fn request(store_id: StoreId) -> SaveDraftRequest {
        SaveDraftRequest {
            store_id,
            name: "counter 1".to_string(),
            lines: vec![CheckoutLine {
                variant_id: VariantId::new(),
                quantity: 2,
                unit_price: 500,
            }],
        }
    }

    #[tokio::test]
    async fn network_failure_falls_back_to_local_store() {
        let store_id = StoreId::new();
        let manager = DraftManager::new(DeadRemote, InMemoryDraftStore::new());

        let (draft, location) = manager.save(request(store_id)).await.unwrap();
        assert_eq!(location, DraftLocation::Local);
        assert_eq!(draft.store_id, store_id);

        let listed = manager.list(store_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].draft_id, draft.draft_id);
    }

    #[tokio::test]
    async fn server_rejection_does_not_fall_back() {
        let manager = DraftManager::new(RejectingRemote, InMemoryDraftStore::new());
        let store_id = StoreId::new();

        let err = manager.save(request(store_id)).await.unwrap_err();
        assert!(matches!(err, SalesError::Api(ApiError::Api(422, _))));
        // Nothing was parked locally.
        assert!(manager.list(store_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_local_drafts_even_offline() {
        let store_id = StoreId::new();
        let manager = DraftManager::new(DeadRemote, InMemoryDraftStore::new());
        let (draft, _) = manager.save(request(store_id)).await.unwrap();

        manager.delete(draft.draft_id).await.unwrap();
        assert!(manager.list(store_id).await.unwrap().is_empty());
    }
}
