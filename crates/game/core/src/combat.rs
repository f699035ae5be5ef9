//! Combat resolution: player rolls against enemy rolls.
//!
//! Resolution is pure with respect to session state. The caller (the phase
//! machine) applies consequences through
//! [`SessionState::apply`](crate::state::SessionState::apply).

use crate::config::Weapon;
use crate::rng::Randomizer;

/// Default number of cosmetic frames shown before the real roll.
pub const DEFAULT_PREVIEW_STEPS: usize = 10;

/// Player action offered during a combat round.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Attack,
    Dodge,
}

impl ActionKind {
    /// Control id that triggers this action.
    pub fn trigger_id(self) -> &'static str {
        self.into()
    }

    pub fn from_trigger(id: &str) -> Option<Self> {
        match id {
            "attack" => Some(Self::Attack),
            "dodge" => Some(Self::Dodge),
            _ => None,
        }
    }

    /// Upper bound of the player's roll for this action.
    pub fn roll_max(self, weapon: &Weapon) -> u32 {
        match self {
            Self::Attack => weapon.attack_max,
            Self::Dodge => weapon.dodge_max,
        }
    }
}

/// Result of one player roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOutcome {
    pub roll: u32,
    pub success: bool,
}

impl RollOutcome {
    pub fn against(roll: u32, enemy_roll: u32) -> Self {
        Self {
            roll,
            success: roll_beats(roll, enemy_roll),
        }
    }
}

/// Strict comparison; a tie goes to the enemy.
pub fn roll_beats(player_roll: u32, enemy_roll: u32) -> bool {
    player_roll > enemy_roll
}

/// Roll for `kind` with `weapon` against `enemy_roll`.
pub fn resolve_action<R>(
    kind: ActionKind,
    weapon: &Weapon,
    enemy_roll: u32,
    rng: &mut R,
) -> RollOutcome
where
    R: Randomizer + ?Sized,
{
    let roll = rng.int_in_range(kind.roll_max(weapon));
    RollOutcome::against(roll, enemy_roll)
}

/// One frame of the animated roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollFrame {
    pub roll: u32,
    pub is_final: bool,
}

/// Lazy sequence of `steps` cosmetic frames followed by the resolved roll.
pub struct RollPreview<'r, R: Randomizer + ?Sized> {
    rng: &'r mut R,
    max: u32,
    final_roll: u32,
    steps: usize,
    emitted: usize,
}

impl<R: Randomizer + ?Sized> Iterator for RollPreview<'_, R> {
    type Item = RollFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = match self.emitted {
            n if n < self.steps => RollFrame {
                roll: self.rng.int_in_range(self.max),
                is_final: false,
            },
            n if n == self.steps => RollFrame {
                roll: self.final_roll,
                is_final: true,
            },
            _ => return None,
        };
        self.emitted += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.emitted);
        (remaining, Some(remaining))
    }
}

impl<R: Randomizer + ?Sized> ExactSizeIterator for RollPreview<'_, R> {}

/// Build a fresh preview ending in `final_roll`; yields exactly `steps + 1` frames.
pub fn animated_roll_preview<R>(
    rng: &mut R,
    max: u32,
    final_roll: u32,
    steps: usize,
) -> RollPreview<'_, R>
where
    R: Randomizer + ?Sized,
{
    RollPreview {
        rng,
        max,
        final_roll,
        steps,
        emitted: 0,
    }
}
