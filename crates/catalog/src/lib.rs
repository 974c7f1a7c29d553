//! `tillpoint-catalog` — product/variant browsing for the POS screens.
//!
//! Paged catalog search with the same offset/append contract as the
//! count listing, plus a cache for signed variant image URLs keyed to
//! their server-issued expiry.

pub mod browse;
pub mod image;

pub use browse::CatalogBrowser;
pub use image::ImageUrlCache;
