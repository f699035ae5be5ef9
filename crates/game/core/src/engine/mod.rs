//! Phase state machine for one game session.
//!
//! A session walks through the phases in a fixed order:
//!
//! ```text
//! NamePrompt → WeaponSelect → Encounter ⇄ CombatRound → GameOver → NamePrompt
//! ```
//!
//! [`Phase::advance`] is the only transition function. It is pure: the async
//! game loop gathers a [`PhaseInput`] at the phase's suspension point (a click,
//! a roll) and feeds it back here. All session state travels inside the phase
//! value, so there is no hidden shared context between phases.

mod errors;

pub use errors::TransitionError;

use crate::combat::{ActionKind, RollOutcome};
use crate::config::{Catalog, Weapon};
use crate::state::{RoundEffect, SessionState};

/// Label of a phase, used in logs and errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PhaseKind {
    NamePrompt,
    WeaponSelect,
    Encounter,
    CombatRound,
    GameOver,
}

/// Final record of a finished session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    pub player_name: String,
    pub weapon: Weapon,
    pub score: u32,
    pub enemies_defeated: u32,
}

impl From<SessionState> for SessionSummary {
    fn from(session: SessionState) -> Self {
        Self {
            player_name: session.player_name().to_owned(),
            weapon: session.weapon().clone(),
            score: session.score(),
            enemies_defeated: session.enemy_index(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player's name.
    NamePrompt,
    /// Waiting for a weapon choice.
    WeaponSelect { player_name: String },
    /// Facing the current enemy; an enemy roll is due.
    Encounter(SessionState),
    /// Enemy has rolled; waiting for attack or dodge.
    CombatRound {
        session: SessionState,
        enemy_roll: u32,
    },
    /// Out of hit points; waiting for retry.
    GameOver(SessionSummary),
}

/// Input gathered at a phase's suspension point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhaseInput {
    NameEntered(String),
    WeaponChosen(usize),
    EnemyRolled(u32),
    ActionResolved {
        kind: ActionKind,
        outcome: RollOutcome,
    },
    Retry,
}

impl PhaseInput {
    fn label(&self) -> &'static str {
        match self {
            Self::NameEntered(_) => "name_entered",
            Self::WeaponChosen(_) => "weapon_chosen",
            Self::EnemyRolled(_) => "enemy_rolled",
            Self::ActionResolved { .. } => "action_resolved",
            Self::Retry => "retry",
        }
    }
}

/// Result of a successful transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub phase: Phase,
    /// Present only when a combat action was applied.
    pub effect: Option<RoundEffect>,
}

impl Transition {
    fn to(phase: Phase) -> Self {
        Self {
            phase,
            effect: None,
        }
    }
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::NamePrompt => PhaseKind::NamePrompt,
            Self::WeaponSelect { .. } => PhaseKind::WeaponSelect,
            Self::Encounter(_) => PhaseKind::Encounter,
            Self::CombatRound { .. } => PhaseKind::CombatRound,
            Self::GameOver(_) => PhaseKind::GameOver,
        }
    }

    /// Session carried by the phase, if a run is in progress.
    pub fn session(&self) -> Option<&SessionState> {
        match self {
            Self::Encounter(session) | Self::CombatRound { session, .. } => Some(session),
            _ => None,
        }
    }

    /// Consume the phase and the input, producing the next phase.
    pub fn advance(
        self,
        input: PhaseInput,
        catalog: &Catalog,
    ) -> Result<Transition, TransitionError> {
        match (self, input) {
            (Self::NamePrompt, PhaseInput::NameEntered(player_name)) => {
                Ok(Transition::to(Self::WeaponSelect { player_name }))
            }

            (Self::WeaponSelect { player_name }, PhaseInput::WeaponChosen(index)) => {
                let weapon = catalog
                    .weapon(index)
                    .ok_or(TransitionError::UnknownWeapon {
                        index,
                        available: catalog.weapons().len(),
                    })?
                    .clone();
                Ok(Transition::to(Self::Encounter(SessionState::new(
                    player_name,
                    weapon,
                ))))
            }

            (Self::Encounter(session), PhaseInput::EnemyRolled(enemy_roll)) => {
                Ok(Transition::to(Self::CombatRound {
                    session,
                    enemy_roll,
                }))
            }

            (Self::CombatRound { mut session, .. }, PhaseInput::ActionResolved { kind, outcome }) => {
                let enemy = session.current_enemy(catalog).clone();
                let effect = session.apply(kind, outcome, &enemy)?;
                let phase = if session.is_alive() {
                    Self::Encounter(session)
                } else {
                    Self::GameOver(session.into())
                };
                Ok(Transition {
                    phase,
                    effect: Some(effect),
                })
            }

            (Self::GameOver(_), PhaseInput::Retry) => Ok(Transition::to(Self::NamePrompt)),

            (phase, input) => Err(TransitionError::UnexpectedInput {
                phase: phase.kind(),
                input: input.label(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_dodge() -> PhaseInput {
        PhaseInput::ActionResolved {
            kind: ActionKind::Dodge,
            outcome: RollOutcome {
                roll: 1,
                success: false,
            },
        }
    }

    fn winning_attack() -> PhaseInput {
        PhaseInput::ActionResolved {
            kind: ActionKind::Attack,
            outcome: RollOutcome {
                roll: 6,
                success: true,
            },
        }
    }

    fn encounter(catalog: &Catalog, weapon: usize) -> Phase {
        Phase::NamePrompt
            .advance(PhaseInput::NameEntered("Ada".into()), catalog)
            .unwrap()
            .phase
            .advance(PhaseInput::WeaponChosen(weapon), catalog)
            .unwrap()
            .phase
    }

    fn round(phase: Phase, enemy_roll: u32, input: PhaseInput, catalog: &Catalog) -> Transition {
        phase
            .advance(PhaseInput::EnemyRolled(enemy_roll), catalog)
            .unwrap()
            .phase
            .advance(input, catalog)
            .unwrap()
    }

    #[test]
    fn weapon_choice_uses_literal_catalog_position() {
        let catalog = Catalog::default();
        for (index, weapon) in catalog.weapons().iter().enumerate() {
            let phase = encounter(&catalog, index);
            let session = phase.session().unwrap();
            assert_eq!(session.weapon(), weapon);
            assert_eq!(session.player_name(), "Ada");
        }
    }

    #[test]
    fn empty_name_is_accepted() {
        let catalog = Catalog::default();
        let next = Phase::NamePrompt
            .advance(PhaseInput::NameEntered(String::new()), &catalog)
            .unwrap();
        assert_eq!(
            next.phase,
            Phase::WeaponSelect {
                player_name: String::new()
            }
        );
    }

    #[test]
    fn unknown_weapon_is_rejected() {
        let catalog = Catalog::default();
        let err = Phase::WeaponSelect {
            player_name: "Ada".into(),
        }
        .advance(PhaseInput::WeaponChosen(3), &catalog)
        .unwrap_err();
        assert_eq!(
            err,
            TransitionError::UnknownWeapon {
                index: 3,
                available: 3
            }
        );
    }

    #[test]
    fn mismatched_input_is_rejected() {
        let catalog = Catalog::default();
        let err = Phase::NamePrompt
            .advance(PhaseInput::Retry, &catalog)
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError::UnexpectedInput {
                phase: PhaseKind::NamePrompt,
                input: "retry"
            }
        );
    }

    #[test]
    fn victory_moves_to_the_next_enemy() {
        let catalog = Catalog::default();
        let transition = round(encounter(&catalog, 0), 4, winning_attack(), &catalog);

        assert_eq!(
            transition.effect,
            Some(RoundEffect::EnemyDefeated { score_gained: 1 })
        );
        let session = transition.phase.session().unwrap();
        assert_eq!(transition.phase.kind(), PhaseKind::Encounter);
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_enemy(&catalog).name, "Troll");
    }

    #[test]
    fn three_failed_dodges_end_the_session_with_prior_score() {
        let catalog = Catalog::default();
        let mut phase = round(encounter(&catalog, 0), 2, winning_attack(), &catalog).phase;

        let mut hit_points = Vec::new();
        loop {
            let transition = round(phase, 5, failed_dodge(), &catalog);
            if let Some(RoundEffect::Wounded { hit_points: hp }) = transition.effect {
                hit_points.push(hp);
            }
            phase = transition.phase;
            if phase.kind() == PhaseKind::GameOver {
                break;
            }
        }

        assert_eq!(hit_points, vec![2, 1, 0]);
        let Phase::GameOver(summary) = phase else {
            panic!("expected game over");
        };
        assert_eq!(summary.player_name, "Ada");
        assert_eq!(summary.score, 1);
        assert_eq!(summary.enemies_defeated, 1);

        let restart = Phase::GameOver(summary)
            .advance(PhaseInput::Retry, &catalog)
            .unwrap();
        assert_eq!(restart.phase, Phase::NamePrompt);
    }
}
