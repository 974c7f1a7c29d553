//! Transfer lifecycle against a mock host.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use chrono::Utc;

use tillpoint_auth::{AccessToken, StaticTokenSource};
use tillpoint_client::dto::{CreateTransferRequest, TransferList, TransferStatus, TransferView};
use tillpoint_client::{ApiClient, ClientConfig};
use tillpoint_core::{StoreId, TransferId, VariantId};
use tillpoint_transfers::{TransferDraft, receivable};

#[derive(Clone, Default)]
struct Host {
    transfers: Arc<Mutex<Vec<TransferView>>>,
}

async fn create(
    State(host): State<Host>,
    Json(request): Json<CreateTransferRequest>,
) -> Json<TransferView> {
    let view = TransferView {
        transfer_id: TransferId::new(),
        from_store_id: request.from_store_id,
        to_store_id: request.to_store_id,
        status: TransferStatus::Pending,
        lines: request.lines,
        created_at: Utc::now(),
    };
    host.transfers.lock().unwrap().push(view.clone());
    Json(view)
}

async fn list(State(host): State<Host>) -> Json<TransferList> {
    Json(TransferList {
        items: host.transfers.lock().unwrap().clone(),
    })
}

async fn receive(
    State(host): State<Host>,
    Path(transfer_id): Path<TransferId>,
) -> Result<Json<TransferView>, StatusCode> {
    let mut transfers = host.transfers.lock().unwrap();
    let view = transfers
        .iter_mut()
        .find(|t| t.transfer_id == transfer_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    view.status = TransferStatus::Received;
    Ok(Json(view.clone()))
}

async fn spawn(host: Host) -> (String, tokio::task::JoinHandle<()>) {
    let app = axum::Router::new()
        .route("/transfers", post(create).get(list))
        .route("/transfers/:transfer_id/receive", post(receive))
        .with_state(host);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (base_url, handle)
}

fn client_for(base_url: &str) -> ApiClient {
    let tokens = Arc::new(StaticTokenSource::new(AccessToken::new("test-token")));
    ApiClient::new(ClientConfig::new(base_url), tokens).unwrap()
}

#[tokio::test]
async fn transfer_round_trip_create_list_receive() {
    let (base_url, handle) = spawn(Host::default()).await;
    let client = client_for(&base_url);

    let from = StoreId::new();
    let to = StoreId::new();

    let mut draft = TransferDraft::new(from, to).unwrap();
    draft.add_line(VariantId::new(), 4).unwrap();
    let view = draft.submit(&client).await.unwrap();
    assert_eq!(view.status, TransferStatus::Pending);
    assert!(!receivable(&view));

    let listed = client.list_transfers(from).await.unwrap();
    assert_eq!(listed.items.len(), 1);

    let received = client.receive_transfer(view.transfer_id).await.unwrap();
    assert_eq!(received.status, TransferStatus::Received);

    handle.abort();
}

#[tokio::test]
async fn receiving_an_unknown_transfer_surfaces_the_status() {
    let (base_url, handle) = spawn(Host::default()).await;
    let client = client_for(&base_url);

    let err = client.receive_transfer(TransferId::new()).await.unwrap_err();
    assert!(err.user_message().contains("404"));

    handle.abort();
}
