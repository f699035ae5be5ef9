//! Builds the runtime, catalog, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::Catalog;
use runtime::{PresentationPort, Runtime};

use crate::catalog::{CatalogFactory, ContentCatalogFactory};
use crate::config::ClientConfig;

/// Builder that assembles the catalog, runtime, and configuration for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
    catalog_factory: Arc<dyn CatalogFactory>,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        let default_factory = ContentCatalogFactory::from_path(config.catalog_path.clone());
        Self {
            config,
            catalog_factory: Arc::new(default_factory),
        }
    }

    /// Provide a custom catalog factory (e.g., a fixed in-memory catalog).
    pub fn catalog_factory(mut self, factory: impl CatalogFactory + 'static) -> Self {
        self.catalog_factory = Arc::new(factory);
        self
    }

    pub fn build(self, presentation: Arc<dyn PresentationPort>) -> Result<RuntimeSetup> {
        let catalog = self
            .catalog_factory
            .build()
            .context("Failed to load weapon and enemy catalog")?;

        let runtime_config = self.config.runtime_config();
        tracing::info!(
            session = %runtime_config.session_id,
            weapons = catalog.weapons().len(),
            enemies = catalog.enemies().len(),
            "Bootstrapping runtime"
        );

        let runtime = Runtime::builder()
            .config(runtime_config)
            .catalog(catalog.clone())
            .shared_presentation(presentation)
            .build()?;

        Ok(RuntimeSetup {
            config: self.config,
            catalog,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub catalog: Catalog,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Enemy, Weapon};
    use runtime::DiscardPresentation;

    fn tiny_catalog() -> Catalog {
        Catalog::new(
            vec![Weapon::new("Stick", 2, 2)],
            vec![Enemy::new("Slime", 1, 1)],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn builds_with_bundled_catalog() {
        let config = ClientConfig {
            session_id: Some("bootstrap-test".into()),
            ..ClientConfig::default()
        };

        let setup = RuntimeBuilder::new(config)
            .build(Arc::new(DiscardPresentation))
            .unwrap();

        assert_eq!(setup.catalog, Catalog::default());
        assert_eq!(setup.runtime.handle().session_id().as_str(), "bootstrap-test");
    }

    #[tokio::test]
    async fn custom_factory_overrides_configured_path() {
        let config = ClientConfig {
            catalog_path: Some("/nonexistent/catalog.ron".into()),
            ..ClientConfig::default()
        };

        let setup = RuntimeBuilder::new(config)
            .catalog_factory(tiny_catalog())
            .build(Arc::new(DiscardPresentation))
            .unwrap();

        assert_eq!(setup.catalog, tiny_catalog());
    }

    #[test]
    fn bad_catalog_path_fails_with_context() {
        let config = ClientConfig {
            catalog_path: Some("/nonexistent/catalog.ron".into()),
            ..ClientConfig::default()
        };

        let err = RuntimeBuilder::new(config)
            .build(Arc::new(DiscardPresentation))
            .err()
            .unwrap();
        assert!(err.to_string().contains("catalog"));
    }
}
