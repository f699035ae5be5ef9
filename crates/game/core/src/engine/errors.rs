use thiserror::Error;

use super::PhaseKind;

/// Input rejected by the phase state machine.
///
/// The game loop only feeds inputs it derived from the current phase, so the
/// input variants indicate a bug in the caller. The overflow variants come from
/// catalogs whose score values exceed the counters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("input `{input}` is not accepted in the {phase} phase")]
    UnexpectedInput {
        phase: PhaseKind,
        input: &'static str,
    },

    #[error("weapon index {index} is outside the catalog ({available} weapons)")]
    UnknownWeapon { index: usize, available: usize },

    #[error("score {score} cannot grow by {gained}")]
    ScoreOverflow { score: u32, gained: u32 },

    #[error("enemy index cannot advance past {index}")]
    EnemyIndexOverflow { index: u32 },
}
