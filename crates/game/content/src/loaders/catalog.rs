//! Weapon and enemy catalog loader.

use std::path::Path;

use anyhow::Context;
use game_core::{Catalog, Enemy, Weapon};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Bundled default catalog.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.ron");

/// Catalog structure for RON/JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub weapons: Vec<Weapon>,
    pub enemies: Vec<Enemy>,
}

impl CatalogFile {
    /// Validate the raw lists into a [`Catalog`].
    pub fn into_catalog(self) -> LoadResult<Catalog> {
        Catalog::new(self.weapons, self.enemies).context("Invalid catalog")
    }
}

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Ron,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension; anything other than `.json` is RON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Ron,
        }
    }

    pub fn parse(self, content: &str) -> LoadResult<CatalogFile> {
        match self {
            Self::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e)),
            Self::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse catalog JSON: {}", e)),
        }
    }
}

/// Loader for weapon/enemy catalogs.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON or JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog file; `.json` files are parsed as JSON,
    ///   everything else as RON
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let catalog = CatalogFormat::from_path(path)
            .parse(&content)?
            .into_catalog()
            .with_context(|| format!("Catalog file {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            weapons = catalog.weapons().len(),
            enemies = catalog.enemies().len(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    /// Parse the catalog bundled with the crate.
    pub fn embedded() -> LoadResult<Catalog> {
        CatalogFormat::Ron
            .parse(EMBEDDED_CATALOG)
            .context("Embedded catalog")?
            .into_catalog()
    }
}
