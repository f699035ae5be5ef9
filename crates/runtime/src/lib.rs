//! Runtime orchestration for the event-driven adventure.
//!
//! This crate wires the pure rules of `game_core` to the outside world: it
//! waits on user triggers, rolls dice, paces the combat animation, and pushes
//! views to a presentation port. Consumers embed [`Runtime`] to drive sessions,
//! and fire controls or subscribe to events through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`triggers`] implements the single-shot trigger waits and form fields
//! - [`events`] provides topic-based event bus for progress notifications
//! - `workers` keeps the game loop task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod triggers;

mod workers;

pub use api::{
    DiscardPresentation, PresentationPort, Result, RuntimeError, RuntimeHandle, SessionId, View,
    controls,
};
pub use events::{EventBus, GameEvent, Topic};
pub use runtime::{PacingConfig, Runtime, RuntimeBuilder, RuntimeConfig, RuntimeTask};
pub use triggers::{EventWaiter, FieldStore, TriggerBoard, TriggerId};
