//! Event payloads published by the game loop.

use game_core::{ActionKind, Enemy, RollOutcome, RoundEffect, SessionSummary, Weapon};
use serde::{Deserialize, Serialize};

use super::bus::Topic;
use crate::api::SessionId;

/// Progress notifications for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A weapon was chosen and the run begins.
    SessionStarted {
        session: SessionId,
        player_name: String,
        weapon: Weapon,
    },

    /// The enemy rolled; the player must attack or dodge.
    EnemyEncountered {
        enemy: Enemy,
        enemy_roll: u32,
        hit_points: u32,
    },

    /// A combat action was rolled and applied.
    ActionResolved {
        kind: ActionKind,
        outcome: RollOutcome,
        effect: RoundEffect,
    },

    /// Hit points ran out.
    SessionEnded {
        session: SessionId,
        summary: SessionSummary,
    },
}

impl GameEvent {
    pub fn topic(&self) -> Topic {
        match self {
            Self::SessionStarted { .. } | Self::SessionEnded { .. } => Topic::Session,
            Self::EnemyEncountered { .. } | Self::ActionResolved { .. } => Topic::Combat,
        }
    }
}
