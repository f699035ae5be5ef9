//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, catalog assembly, and runtime setup that can
//! be reused by the CLI or other front-end crates.
pub mod builder;
pub mod catalog;
pub mod config;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use catalog::{CatalogFactory, ContentCatalogFactory};
pub use config::ClientConfig;
