//! Pure rules of the adventure, shared by the runtime and tools.
//!
//! `game-core` defines the catalogs, the combat roll rules, the per-run
//! [`SessionState`], and the phase state machine ([`engine::Phase`]). It does
//! no I/O and never waits: the async runtime owns every suspension point and
//! feeds the results back through [`engine::Phase::advance`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod state;

pub use combat::{
    ActionKind, DEFAULT_PREVIEW_STEPS, RollFrame, RollOutcome, RollPreview,
    animated_roll_preview, resolve_action, roll_beats,
};
pub use config::{Catalog, Enemy, Weapon};
pub use engine::{Phase, PhaseInput, PhaseKind, SessionSummary, Transition, TransitionError};
pub use error::{CatalogError, StatKind};
pub use rng::{PcgRng, Randomizer, preview_seed};
pub use state::{RoundEffect, STARTING_HIT_POINTS, SessionState};
