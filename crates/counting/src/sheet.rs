//! The count entry store: entered physical quantities, keyed by variant.

use tillpoint_client::dto::CountedPair;
use tillpoint_core::{DomainError, DomainResult, VariantId, clamp_non_negative};

use crate::model::CountableItem;

/// In-memory sheet of countable rows in load order.
///
/// Quantity updates are functional: the row vector is rebuilt with only
/// the matching row replaced, so previously handed-out snapshots stay
/// valid and row order and identity never change under edit.
#[derive(Debug, Default, Clone)]
pub struct CountSheet {
    items: Vec<CountableItem>,
}

impl CountSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sheet (fresh search at offset 0). Entered
    /// quantities are discarded by design.
    pub fn replace(&mut self, items: Vec<CountableItem>) {
        self.items = items;
    }

    /// Append a page ("load more"). Existing rows, including their
    /// entered quantities, are untouched.
    pub fn append(&mut self, items: Vec<CountableItem>) {
        self.items.extend(items);
    }

    /// Record an entered quantity, clamped to `max(0, qty)`.
    ///
    /// Returns the stored quantity. Unknown variants are an error: the
    /// UI only edits rows it rendered from this sheet.
    pub fn update_quantity(&mut self, variant_id: VariantId, qty: i64) -> DomainResult<u64> {
        if !self.items.iter().any(|item| item.variant_id == variant_id) {
            return Err(DomainError::not_found());
        }

        let stored = clamp_non_negative(qty);
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.variant_id == variant_id {
                    CountableItem {
                        physical_qty: stored,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();

        Ok(stored)
    }

    /// All rows as `{variant_id, physical_qty}` pairs, zero counts
    /// included; the comparator classifies the full sheet.
    pub fn counted_pairs(&self) -> Vec<CountedPair> {
        self.items
            .iter()
            .map(|item| CountedPair {
                variant_id: item.variant_id,
                physical_qty: item.physical_qty,
            })
            .collect()
    }

    pub fn items(&self) -> &[CountableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_client::dto::SystemCountRow;

    fn row(name: &str, system_qty: u64) -> CountableItem {
        CountableItem::from_row(SystemCountRow {
            variant_id: VariantId::new(),
            product_name: name.to_string(),
            sku: None,
            variant_name: None,
            system_qty,
        })
    }

    #[test]
    fn entered_quantity_is_clamped_to_zero() {
        let mut sheet = CountSheet::new();
        let item = row("Shirt", 10);
        let id = item.variant_id;
        sheet.replace(vec![item]);

        assert_eq!(sheet.update_quantity(id, -4).unwrap(), 0);
        assert_eq!(sheet.items()[0].physical_qty, 0);

        assert_eq!(sheet.update_quantity(id, 7).unwrap(), 7);
        assert_eq!(sheet.items()[0].physical_qty, 7);
    }

    #[test]
    fn update_preserves_order_and_other_rows() {
        let mut sheet = CountSheet::new();
        let items = vec![row("A", 1), row("B", 2), row("C", 3)];
        let ids: Vec<_> = items.iter().map(|i| i.variant_id).collect();
        sheet.replace(items);

        sheet.update_quantity(ids[1], 9).unwrap();

        let after: Vec<_> = sheet.items().iter().map(|i| i.variant_id).collect();
        assert_eq!(after, ids);
        assert_eq!(sheet.items()[0].physical_qty, 0);
        assert_eq!(sheet.items()[1].physical_qty, 9);
        assert_eq!(sheet.items()[2].physical_qty, 0);
    }

    #[test]
    fn unknown_variant_is_not_found() {
        let mut sheet = CountSheet::new();
        sheet.replace(vec![row("A", 1)]);
        assert_eq!(
            sheet.update_quantity(VariantId::new(), 5),
            Err(DomainError::NotFound)
        );
    }

    #[test]
    fn counted_pairs_include_zero_counts() {
        let mut sheet = CountSheet::new();
        let items = vec![row("A", 1), row("B", 2)];
        let edited = items[0].variant_id;
        sheet.replace(items);
        sheet.update_quantity(edited, 3).unwrap();

        let pairs = sheet.counted_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].physical_qty, 3);
        assert_eq!(pairs[1].physical_qty, 0);
    }

    #[test]
    fn append_keeps_entered_quantities() {
        let mut sheet = CountSheet::new();
        let first = vec![row("A", 1)];
        let edited = first[0].variant_id;
        sheet.replace(first);
        sheet.update_quantity(edited, 2).unwrap();

        sheet.append(vec![row("B", 5)]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.items()[0].physical_qty, 2);
    }
}
