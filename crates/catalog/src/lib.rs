//! Product catalog browsing (join + filter + browser state).
//!
//! This crate contains the catalog logic as deterministic, in-memory domain
//! code: source records are joined once into enriched products, and a
//! [`ProductBrowser`] derives the visible rows from its owner/search state.
//! No IO happens here apart from parsing an already-loaded dataset string.

pub mod browser;
pub mod catalog;
pub mod category;
pub mod dataset;
pub mod filter;
pub mod product;
pub mod user;
pub mod view;

pub use browser::{OwnerTab, ProductBrowser};
pub use catalog::{Catalog, DanglingReference, EnrichedProduct};
pub use category::Category;
pub use dataset::Dataset;
pub use filter::{OwnerFilter, SearchQuery, any_product_matches, filter_products};
pub use product::Product;
pub use user::{Sex, User};
