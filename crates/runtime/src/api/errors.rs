//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from trigger waits, phase transitions, and runtime assembly
//! so clients can bubble them up with consistent context.
use thiserror::Error;

use crate::triggers::TriggerId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("trigger board closed")]
    TriggersClosed,

    #[error("await_one requires at least one candidate trigger")]
    NoCandidates,

    #[error("trigger `{0}` is already armed by a pending wait")]
    AlreadyArmed(TriggerId),

    #[error("trigger `{0}` resolved a wait it was not a candidate for")]
    UnexpectedTrigger(TriggerId),

    #[error(transparent)]
    Transition(#[from] game_core::TransitionError),

    #[error("runtime requires a presentation port before building")]
    MissingPresentation,

    #[error("game loop task failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// Shutdown of the trigger board, as opposed to a fault.
    pub fn is_shutdown(&self) -> bool {
        matches!(self, Self::TriggersClosed)
    }
}
