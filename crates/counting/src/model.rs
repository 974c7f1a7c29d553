//! View model for one countable row.

use tillpoint_client::dto::SystemCountRow;
use tillpoint_core::VariantId;

/// One variant as shown on the count sheet.
///
/// Created per page fetch; `physical_qty` is edited locally and lost on
/// reset or a fresh search; nothing here persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountableItem {
    pub variant_id: VariantId,
    pub sku: Option<String>,
    pub product_name: String,
    pub variant_name: Option<String>,
    pub system_qty: u64,
    pub physical_qty: u64,
}

impl CountableItem {
    /// Build a fresh sheet row from a system-count row. The physical
    /// quantity starts at zero until the operator enters one.
    pub fn from_row(row: SystemCountRow) -> Self {
        Self {
            variant_id: row.variant_id,
            sku: row.sku,
            product_name: row.product_name,
            variant_name: row.variant_name,
            system_qty: row.system_qty,
            physical_qty: 0,
        }
    }
}
