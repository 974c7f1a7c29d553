//! `tillpoint-transfers` — store-to-store transfer requests.
//!
//! The client builds and submits transfer requests and renders their
//! status; the approval state machine itself is server-owned.

pub mod transfer;

pub use transfer::{TransferDraft, TransferError, receivable};
