//! `tillpoint-sales` — checkout-side workflows.
//!
//! The cart clamps quantities to the known stock ceiling, checkout and
//! returns go through the remote API, and cart drafts are saved
//! server-side with an in-memory fallback when the network is down.

pub mod cart;
pub mod checkout;
pub mod draft;
pub mod error;
pub mod returns;

pub use cart::{Cart, CartLine};
pub use checkout::submit_checkout;
pub use draft::{DraftLocation, DraftManager, DraftStore, InMemoryDraftStore, RemoteDraftStore};
pub use error::SalesError;
pub use returns::ReturnBuilder;
