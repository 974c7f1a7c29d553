//! Black-box tests for the HTTP client against a mock function host
//! bound to an ephemeral port.

use std::sync::Arc;

use axum::Json;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::json;

use tillpoint_auth::{AccessToken, StaticTokenSource};
use tillpoint_client::dto::CountedPair;
use tillpoint_client::{ApiClient, ApiError, ClientConfig};
use tillpoint_core::{StoreId, VariantId};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: axum::Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn client_for(base_url: &str) -> ApiClient {
    let tokens = Arc::new(StaticTokenSource::new(AccessToken::new("test-token")));
    ApiClient::new(ClientConfig::new(base_url), tokens).expect("client construction")
}

#[tokio::test]
async fn bearer_token_is_attached_to_every_request() {
    let app = axum::Router::new().route(
        "/inventory/system-count",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            assert_eq!(auth, "Bearer test-token");
            Json(json!({ "items": [], "count": 0 }))
        }),
    );
    let srv = TestServer::spawn(app).await;

    let page = client_for(&srv.base_url)
        .get_system_count(StoreId::new(), None, 50, 0)
        .await
        .unwrap();
    assert_eq!(page.count, 0);
}

#[tokio::test]
async fn search_and_paging_parameters_are_forwarded() {
    #[derive(serde::Deserialize)]
    struct Params {
        search: Option<String>,
        limit: u32,
        offset: u64,
    }

    let app = axum::Router::new().route(
        "/inventory/system-count",
        get(|Query(params): Query<Params>| async move {
            assert_eq!(params.search.as_deref(), Some("shirt"));
            assert_eq!(params.limit, 50);
            assert_eq!(params.offset, 100);
            Json(json!({
                "items": [{
                    "variant_id": VariantId::new(),
                    "product_name": "Shirt",
                    "sku": "SH-01",
                    "system_qty": 3,
                }],
                "count": 101,
            }))
        }),
    );
    let srv = TestServer::spawn(app).await;

    let page = client_for(&srv.base_url)
        .get_system_count(StoreId::new(), Some("shirt"), 50, 100)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.count, 101);
    assert_eq!(page.items[0].variant_name, None);
}

#[tokio::test]
async fn unauthorized_status_maps_to_unauthorized_error() {
    let app = axum::Router::new().route(
        "/inventory/compare-count",
        post(|| async { StatusCode::UNAUTHORIZED }),
    );
    let srv = TestServer::spawn(app).await;

    let err = client_for(&srv.base_url)
        .compare_count(StoreId::new(), vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn server_rejection_carries_status_and_detail() {
    let app = axum::Router::new().route(
        "/inventory/compare-count",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "unknown store") }),
    );
    let srv = TestServer::spawn(app).await;

    let pairs = vec![CountedPair {
        variant_id: VariantId::new(),
        physical_qty: 1,
    }];
    let err = client_for(&srv.base_url)
        .compare_count(StoreId::new(), pairs)
        .await
        .unwrap_err();

    match err {
        ApiError::Api(status, detail) => {
            assert_eq!(status, 422);
            assert_eq!(detail, "unknown store");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn schema_mismatch_is_a_parse_error_not_a_fallback() {
    // No sniffing of alternative field names; a drifted schema fails
    // loudly.
    let app = axum::Router::new().route(
        "/inventory/system-count",
        get(|| async { Json(json!({ "data": [], "total": 0 })) }),
    );
    let srv = TestServer::spawn(app).await;

    let err = client_for(&srv.base_url)
        .get_system_count(StoreId::new(), None, 50, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn connection_failure_maps_to_network_error() {
    // Ephemeral port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{}", addr))
        .get_system_count(StoreId::new(), None, 50, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
