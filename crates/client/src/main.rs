//! Adventure game client binary.
//!
//! Composition root: loads configuration, installs logging, assembles the
//! runtime via `RuntimeBuilder`, and hands control to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal frontend (default)
//!
//! ```bash
//! GAME_SEED=42 cargo run -p adventure-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the terminal frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use std::sync::Arc;

    use adventure_client::Client;
    use client_bootstrap::{ClientConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, TerminalPresenter, logging};
    use runtime::SessionId;

    // 1. Load configuration from environment
    let mut client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // The log directory and the runtime must agree on the session id.
    let session_id = client_config
        .session_id
        .get_or_insert_with(|| SessionId::generate().to_string())
        .clone();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(&session_id, &cli_config)?;
    tracing::info!(session = %session_id, seed = ?client_config.seed, "Starting adventure client");

    // 3. Presentation and input share the screen state
    let presenter = Arc::new(TerminalPresenter::stdout(frontend_config.clone()));
    let frontend = CliFrontend::new(frontend_config, presenter.subscribe());

    // 4. Build Runtime
    let setup = RuntimeBuilder::new(client_config).build(presenter)?;
    tracing::info!(
        weapons = setup.catalog.weapons().len(),
        enemies = setup.catalog.enemies().len(),
        "Runtime built successfully"
    );

    // 5. Build and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
