//! `tillpoint-core` — shared foundation for the Tillpoint client crates.
//!
//! Typed identifiers, quantity arithmetic, and the domain error model.
//! Nothing in here talks to the network; transport concerns live in
//! `tillpoint-client`.

pub mod error;
pub mod id;
pub mod quantity;

pub use error::{DomainError, DomainResult};
pub use id::{DraftId, ProductId, ReceiptId, StoreId, TenantId, TransferId, VariantId};
pub use quantity::{clamp_non_negative, clamp_to_ceiling};
