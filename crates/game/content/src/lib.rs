//! Data-driven content definitions and loaders.
//!
//! This crate houses the static adventure content and loaders for RON/JSON
//! catalog files:
//! - Weapon catalog (selectable by position)
//! - Enemy catalog (fought in order, repeating)
//!
//! Content is consumed at startup and never changes while the game runs.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogFile, CatalogFormat, CatalogLoader};
