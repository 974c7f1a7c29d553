//! Wire DTOs for the remote functions.
//!
//! One discriminated schema per endpoint. `delta` and `status` on
//! comparison rows are computed server-side and carried as authoritative
//! data; the client never re-derives one from the other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tillpoint_core::{DraftId, ProductId, ReceiptId, StoreId, TransferId, VariantId};

// ---------------------------------------------------------------------------
// Inventory counting
// ---------------------------------------------------------------------------

/// One variant row from the system-count listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemCountRow {
    pub variant_id: VariantId,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub variant_name: Option<String>,
    pub system_qty: u64,
}

/// A page of the system count, plus the server's total row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemCountPage {
    pub items: Vec<SystemCountRow>,
    /// Total matching rows server-side, not the size of this page.
    pub count: u64,
}

/// One entered physical quantity, keyed by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedPair {
    pub variant_id: VariantId,
    pub physical_qty: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareCountRequest {
    pub store_id: StoreId,
    pub items: Vec<CountedPair>,
}

/// Server-side classification of a counted row.
///
/// Treated as independent data: the delta-sign mapping is a server
/// detail the client must not assume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComparisonStatus {
    Match,
    Short,
    Over,
}

/// One classified comparison row. Immutable client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub variant_id: VariantId,
    #[serde(default)]
    pub sku: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub variant_name: Option<String>,
    pub system_qty: u64,
    pub physical_qty: u64,
    /// Physical minus system, as computed by the server.
    pub delta: i64,
    pub status: ComparisonStatus,
}

/// Aggregates computed server-side, consumed read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub matched: u64,
    pub short: u64,
    pub over: u64,
    pub delta_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareCountResponse {
    pub items: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
}

/// Per-item stock adjustment, sent once per non-matching row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustVariantRequest {
    pub store_id: StoreId,
    pub variant_id: VariantId,
    pub system_qty: u64,
    pub physical_qty: u64,
    pub delta: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustVariantAck {
    pub variant_id: VariantId,
    pub new_system_qty: u64,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRow {
    pub variant_id: VariantId,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Price in smallest currency unit.
    pub price: u64,
    /// Stock at the requested store.
    pub stock: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub product_id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub variants: Vec<VariantRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<ProductRow>,
    pub count: u64,
}

/// Signed, time-limited image URL for a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedImageUrl {
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Sales: checkout, drafts, returns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLine {
    pub variant_id: VariantId,
    pub quantity: u64,
    /// Unit price in smallest currency unit.
    pub unit_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub store_id: StoreId,
    pub lines: Vec<CheckoutLine>,
    pub payment: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: ReceiptId,
    pub total: u64,
    pub lines: Vec<CheckoutLine>,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDraftRequest {
    pub store_id: StoreId,
    pub name: String,
    pub lines: Vec<CheckoutLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDto {
    pub draft_id: DraftId,
    pub store_id: StoreId,
    pub name: String,
    pub lines: Vec<CheckoutLine>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftList {
    pub items: Vec<DraftDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnLine {
    pub variant_id: VariantId,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReturnRequest {
    pub receipt_id: ReceiptId,
    pub lines: Vec<ReturnLine>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnConfirmation {
    pub receipt_id: ReceiptId,
    pub refunded_total: u64,
}

// ---------------------------------------------------------------------------
// Transfers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferLine {
    pub variant_id: VariantId,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransferRequest {
    pub from_store_id: StoreId,
    pub to_store_id: StoreId,
    pub lines: Vec<TransferLine>,
}

/// Transfer lifecycle as reported by the server. The approval state
/// machine is server-owned; the client only renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    Approved,
    InTransit,
    Received,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferView {
    pub transfer_id: TransferId,
    pub from_store_id: StoreId,
    pub to_store_id: StoreId,
    pub status: TransferStatus,
    pub lines: Vec<TransferLine>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferList {
    pub items: Vec<TransferView>,
}
