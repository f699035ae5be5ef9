//! Helpers for constructing the catalog consumed by the runtime.
use std::path::PathBuf;

use anyhow::Result;
use game_content::CatalogLoader;
use game_core::Catalog;

pub trait CatalogFactory: Send + Sync {
    fn build(&self) -> Result<Catalog>;
}

/// Catalog factory backed by the game-content loaders.
///
/// Reads the catalog file when a path is configured and falls back to the
/// catalog bundled with game-content otherwise.
#[derive(Clone, Debug, Default)]
pub struct ContentCatalogFactory {
    path: Option<PathBuf>,
}

impl ContentCatalogFactory {
    /// Load from `path` (`.ron` or `.json`).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Use the bundled catalog.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// From an optional configured path.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl CatalogFactory for ContentCatalogFactory {
    fn build(&self) -> Result<Catalog> {
        match &self.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading catalog file");
                CatalogLoader::load(path)
            }
            None => CatalogLoader::embedded(),
        }
    }
}

impl CatalogFactory for Catalog {
    fn build(&self) -> Result<Catalog> {
        Ok(self.clone())
    }
}
