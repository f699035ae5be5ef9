//! Mutable record of one in-progress run.
//!
//! A [`SessionState`] is created when the player picks a weapon, mutated only
//! while fighting, and discarded once the run reaches game over. Every
//! mutation goes through [`SessionState::apply`], which is where the hit point,
//! score, and enemy index invariants are enforced.

use crate::combat::{ActionKind, RollOutcome};
use crate::config::{Catalog, Enemy, Weapon};
use crate::engine::TransitionError;

/// Hit points every run starts with.
pub const STARTING_HIT_POINTS: u32 = 3;

/// State consequence of one resolved action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundEffect {
    /// Successful attack; the next enemy in the catalog steps up.
    EnemyDefeated { score_gained: u32 },
    /// Failed attack or failed dodge; one hit point lost.
    Wounded { hit_points: u32 },
    /// Successful dodge; nothing changes.
    Evaded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    player_name: String,
    weapon: Weapon,
    hit_points: u32,
    score: u32,
    enemy_index: u32,
}

impl SessionState {
    pub fn new(player_name: impl Into<String>, weapon: Weapon) -> Self {
        Self {
            player_name: player_name.into(),
            weapon,
            hit_points: STARTING_HIT_POINTS,
            score: 0,
            enemy_index: 0,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of enemies defeated so far.
    pub fn enemy_index(&self) -> u32 {
        self.enemy_index
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn current_enemy<'c>(&self, catalog: &'c Catalog) -> &'c Enemy {
        catalog.enemy_at(self.enemy_index)
    }

    /// Apply the consequence of `outcome` for `kind` against `enemy`.
    ///
    /// On error the session is left untouched.
    pub fn apply(
        &mut self,
        kind: ActionKind,
        outcome: RollOutcome,
        enemy: &Enemy,
    ) -> Result<RoundEffect, TransitionError> {
        let effect = match (kind, outcome.success) {
            (ActionKind::Attack, true) => {
                let score = self.score.checked_add(enemy.score_value).ok_or(
                    TransitionError::ScoreOverflow {
                        score: self.score,
                        gained: enemy.score_value,
                    },
                )?;
                let enemy_index = self.enemy_index.checked_add(1).ok_or(
                    TransitionError::EnemyIndexOverflow {
                        index: self.enemy_index,
                    },
                )?;
                self.score = score;
                self.enemy_index = enemy_index;
                RoundEffect::EnemyDefeated {
                    score_gained: enemy.score_value,
                }
            }
            (ActionKind::Dodge, true) => RoundEffect::Evaded,
            (_, false) => {
                self.hit_points = self.hit_points.saturating_sub(1);
                RoundEffect::Wounded {
                    hit_points: self.hit_points,
                }
            }
        };
        Ok(effect)
    }
}
