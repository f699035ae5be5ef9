//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/JSON files into validated
//! [`game_core::Catalog`] values.

pub mod catalog;

pub use catalog::{CatalogFile, CatalogFormat, CatalogLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
