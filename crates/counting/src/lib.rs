//! `tillpoint-counting` — the stock count and reconciliation workflow.
//!
//! A count session walks one fixed path: load the system count
//! (debounced search, server-side pagination), enter physical
//! quantities, send the whole sheet for server-side classification,
//! then apply the non-matching rows back one adjustment at a time with
//! progress reporting. Classification (`status`, `delta`) is
//! authoritative server data; this crate only filters and forwards it.

pub mod adjust;
pub mod compare;
pub mod error;
pub mod model;
pub mod search;
pub mod session;
pub mod sheet;

pub use adjust::{AdjustmentOutcome, AdjustmentResult, AdjustmentRunner};
pub use compare::{ComparisonOutcome, compare_sheet};
pub use error::CountError;
pub use model::CountableItem;
pub use search::{LoadedPage, SearchController};
pub use session::{CountSession, SessionPhase};
pub use sheet::CountSheet;
