//! Quantity arithmetic shared by the counting and cart flows.
//!
//! Quantities entered by operators arrive as raw integers from input
//! fields and must never be stored negative; stock-limited contexts
//! additionally cap at the known stock ceiling.

/// Clamp a raw entered quantity to `>= 0`.
pub fn clamp_non_negative(qty: i64) -> u64 {
    qty.max(0) as u64
}

/// Clamp a raw entered quantity to `[0, ceiling]`.
pub fn clamp_to_ceiling(qty: i64, ceiling: u64) -> u64 {
    clamp_non_negative(qty).min(ceiling)
}
