//! High-level runtime orchestrator.
//!
//! The runtime owns the game loop worker, wires up the trigger board, field
//! store and event bus, and exposes a builder-based API for clients to drive
//! the game.

use std::sync::Arc;
use std::time::Duration;

use game_core::{Catalog, DEFAULT_PREVIEW_STEPS, PcgRng, Randomizer, SessionSummary, preview_seed};
use tokio::task::JoinHandle;
use tracing::info;

use crate::api::{PresentationPort, Result, RuntimeError, RuntimeHandle, SessionId};
use crate::events::EventBus;
use crate::triggers::{FieldStore, TriggerBoard};
use crate::workers::{GameLoop, GameLoopParts};

/// Delays between presentation steps of a combat round.
///
/// Only the order of the delays matters to the game; the durations are
/// cosmetic. A zero duration skips the sleep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingConfig {
    /// Cosmetic frames shown before the real roll.
    pub preview_steps: usize,
    pub frame_interval: Duration,
    /// Pause between the final roll frame and the result.
    pub reveal_delay: Duration,
    pub attack_hold: Duration,
    pub dodge_hold: Duration,
}

impl PacingConfig {
    /// No sleeps at all; for tests and scripted drivers.
    pub fn instant() -> Self {
        Self {
            preview_steps: DEFAULT_PREVIEW_STEPS,
            frame_interval: Duration::ZERO,
            reveal_delay: Duration::ZERO,
            attack_hold: Duration::ZERO,
            dodge_hold: Duration::ZERO,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            preview_steps: DEFAULT_PREVIEW_STEPS,
            frame_interval: Duration::from_millis(100),
            reveal_delay: Duration::from_millis(1000),
            attack_hold: Duration::from_millis(2500),
            dodge_hold: Duration::from_millis(1500),
        }
    }
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub session_id: SessionId,
    /// Seed of the outcome generator; drawn from entropy when unset.
    pub seed: Option<u64>,
    pub pacing: PacingConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            session_id: SessionId::generate(),
            seed: None,
            pacing: PacingConfig::default(),
            event_buffer_size: crate::events::DEFAULT_CAPACITY,
        }
    }
}

/// Main runtime that orchestrates one display session.
///
/// Design: Runtime owns the game loop and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for frontends.
pub struct Runtime {
    handle: RuntimeHandle,
    game_loop: GameLoop,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Play a single session and return its summary.
    pub async fn run_session(&mut self) -> Result<SessionSummary> {
        self.game_loop.run_session().await
    }

    /// Run sessions until the handle shuts the runtime down.
    pub async fn run(mut self) -> Result<()> {
        let Err(error) = self.game_loop.run().await;
        if error.is_shutdown() {
            info!(session = %self.handle.session_id(), "Runtime shut down");
            Ok(())
        } else {
            Err(error)
        }
    }

    /// Move the game loop onto its own task.
    pub fn spawn(self) -> RuntimeTask {
        let handle = self.handle();
        let worker = tokio::spawn(self.run());
        RuntimeTask { handle, worker }
    }
}

/// Runtime running on a background task.
pub struct RuntimeTask {
    handle: RuntimeHandle,
    worker: JoinHandle<Result<()>>,
}

impl RuntimeTask {
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Close the trigger board and wait for the game loop to wind down.
    pub async fn shutdown(self) -> Result<()> {
        self.handle.shutdown();
        self.worker.await.map_err(RuntimeError::WorkerJoin)?
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Catalog>,
    presentation: Option<Arc<dyn PresentationPort>>,
    rng: Option<Box<dyn Randomizer>>,
    preview_rng: Option<Box<dyn Randomizer>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            presentation: None,
            rng: None,
            preview_rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Weapon and enemy catalogs; the built-in catalog when unset.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set required presentation port
    pub fn presentation(mut self, port: impl PresentationPort + 'static) -> Self {
        self.presentation = Some(Arc::new(port));
        self
    }

    /// Set required presentation port from a shared handle
    pub fn shared_presentation(mut self, port: Arc<dyn PresentationPort>) -> Self {
        self.presentation = Some(port);
        self
    }

    /// Replace the outcome generator (enemy and player rolls).
    pub fn rng(mut self, rng: impl Randomizer + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Replace the generator behind cosmetic roll frames.
    pub fn preview_rng(mut self, rng: impl Randomizer + 'static) -> Self {
        self.preview_rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let presenter = self
            .presentation
            .ok_or(RuntimeError::MissingPresentation)?;
        let catalog = Arc::new(self.catalog.unwrap_or_default());

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(PcgRng::seeded(seed)) as Box<dyn Randomizer>);
        let preview_rng = self
            .preview_rng
            .unwrap_or_else(|| Box::new(PcgRng::seeded(preview_seed(seed))) as Box<dyn Randomizer>);
        info!(session = %self.config.session_id, seed, "Runtime configured");

        let triggers = TriggerBoard::new();
        let fields = FieldStore::new();
        let events = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(
            triggers.clone(),
            fields.clone(),
            events.clone(),
            self.config.session_id.clone(),
        );

        let game_loop = GameLoop::new(GameLoopParts {
            catalog,
            waiter: Arc::new(triggers),
            fields,
            presenter,
            rng,
            preview_rng,
            pacing: self.config.pacing,
            events,
            session: self.config.session_id,
        });

        Ok(Runtime { handle, game_loop })
    }
}
