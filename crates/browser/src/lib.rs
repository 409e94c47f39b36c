//! Terminal front end for the product catalog.
//!
//! Loads a dataset, builds the catalog once, and drives a
//! [`prodcat_catalog::ProductBrowser`] from line-oriented commands.

pub mod config;
pub mod data;
pub mod session;

pub use config::{BrowserConfig, ConfigFallback};
pub use data::DatasetError;
pub use session::{Command, Outcome, Session, SessionError};
