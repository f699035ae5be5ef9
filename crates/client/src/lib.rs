//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (game loop, trigger board, event bus)
//!   └─→ Frontend (input side of the UI; painting goes through the
//!       runtime's PresentationPort)
//! ```
//!
//! The frontend only ever sees a `RuntimeHandle`. When it returns, the client
//! closes the trigger board and waits for the game loop to stop.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use tracing::info;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects an already-built runtime and a frontend
/// 2. `Client::run()` moves the runtime onto a background task
/// 3. Control passes to the frontend until the player quits or input ends
/// 4. The runtime is shut down and its result reported
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error if it failed, otherwise any error the game
    /// loop stopped with.
    pub async fn run(self) -> Result<()> {
        let task = self.runtime.spawn();
        let handle = task.handle();
        info!(session = %handle.session_id(), "Client started");

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        let runtime_result = task.shutdown().await;
        if let Err(error) = &runtime_result {
            tracing::error!(%error, "Runtime stopped with an error");
        }

        frontend_result?;
        runtime_result?;
        info!("Client stopped");
        Ok(())
    }
}
