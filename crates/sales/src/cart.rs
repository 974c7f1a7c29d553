//! The checkout cart.
//!
//! Quantities are clamped to `[0, stock_ceiling]`; an operator cannot
//! sell more than the store's known stock, and setting a line to zero
//! removes it.

use tillpoint_client::dto::CheckoutLine;
use tillpoint_core::{DomainError, DomainResult, VariantId, clamp_to_ceiling};

/// One cart line with the stock ceiling captured at add time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub variant_id: VariantId,
    pub display_name: String,
    /// Unit price in smallest currency unit.
    pub unit_price: u64,
    pub quantity: u64,
    /// Known stock at the store when the line was added.
    pub stock_ceiling: u64,
}

#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `quantity * unit_price` over all lines.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| line.quantity * line.unit_price)
            .sum()
    }

    /// Add one unit of a variant, or bump an existing line by one
    /// (capped at the ceiling). Out-of-stock variants are refused.
    pub fn add_item(
        &mut self,
        variant_id: VariantId,
        display_name: &str,
        unit_price: u64,
        stock_ceiling: u64,
    ) -> DomainResult<u64> {
        if stock_ceiling == 0 {
            return Err(DomainError::validation("variant is out of stock"));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.variant_id == variant_id) {
            line.quantity = clamp_to_ceiling(line.quantity as i64 + 1, line.stock_ceiling);
            return Ok(line.quantity);
        }

        self.lines.push(CartLine {
            variant_id,
            display_name: display_name.to_string(),
            unit_price,
            quantity: 1,
            stock_ceiling,
        });
        Ok(1)
    }

    /// Set a line's quantity, clamped to `[0, stock_ceiling]`. Zero
    /// removes the line. Returns the stored quantity.
    pub fn set_quantity(&mut self, variant_id: VariantId, qty: i64) -> DomainResult<u64> {
        let Some(index) = self.lines.iter().position(|l| l.variant_id == variant_id) else {
            return Err(DomainError::not_found());
        };

        let stored = clamp_to_ceiling(qty, self.lines[index].stock_ceiling);
        if stored == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = stored;
        }
        Ok(stored)
    }

    pub fn remove(&mut self, variant_id: VariantId) {
        self.lines.retain(|l| l.variant_id != variant_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Wire lines for checkout or draft save.
    pub fn checkout_lines(&self) -> Vec<CheckoutLine> {
        self.lines
            .iter()
            .map(|line| CheckoutLine {
                variant_id: line.variant_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect()
    }

    /// Restore a cart from draft lines. Stock ceilings are unknown at
    /// restore time, so the drafted quantity itself is taken as the
    /// ceiling until the next stock fetch.
    pub fn from_checkout_lines(lines: &[CheckoutLine], names: impl Fn(VariantId) -> String) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|line| CartLine {
                    variant_id: line.variant_id,
                    display_name: names(line.variant_id),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    stock_ceiling: line.quantity,
                })
                .collect(),
        }
    }
}
