//! One module per remote domain, mirroring the serverless function
//! grouping on the other side of the wire.

pub mod catalog;
pub mod inventory;
pub mod sales;
pub mod transfers;
