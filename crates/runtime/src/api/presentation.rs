//! Output boundary of the game loop.
//!
//! The loop describes what each phase shows as a [`View`] and pushes it to a
//! [`PresentationPort`]. It never reads anything back: rendering the view to
//! markup and painting it is the frontend's business.

use std::fmt;
use std::sync::Arc;

use game_core::{ActionKind, Enemy, Weapon};
use serde::{Deserialize, Serialize};

use crate::triggers::TriggerId;

/// Control and field ids shared by the loop and the frontends.
pub mod controls {
    use crate::triggers::TriggerId;

    /// Confirm button on name, welcome, and weapon-choice screens.
    pub const CONFIRM: &str = "ok";
    /// Retry button on the game-over screen.
    pub const RETRY: &str = "retry";
    /// Text field holding the player's name.
    pub const NAME_FIELD: &str = "name";

    const WEAPON_PREFIX: &str = "weapon-";

    /// Control id of the weapon at catalog position `index`.
    pub fn weapon(index: usize) -> TriggerId {
        TriggerId::from(format!("{WEAPON_PREFIX}{index}"))
    }

    /// Catalog position encoded in a weapon control id.
    pub fn weapon_index(id: &str) -> Option<usize> {
        id.strip_prefix(WEAPON_PREFIX)?.parse().ok()
    }
}

/// Identity of the display target a session paints into.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an id from the current wall clock.
    pub fn generate() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        Self(format!("session_{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Presentation request for one screen of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    NamePrompt,
    Welcome {
        player_name: String,
    },
    WeaponSelect {
        player_name: String,
        weapons: Vec<Weapon>,
    },
    WeaponChosen {
        weapon: Weapon,
    },
    Encounter {
        enemy: Enemy,
        enemy_roll: u32,
        hit_points: u32,
        weapon: Weapon,
    },
    /// One frame of the roll animation.
    Roll {
        enemy_roll: u32,
        player_roll: u32,
    },
    AttackResult {
        enemy: Enemy,
        success: bool,
    },
    DodgeResult {
        enemy: Enemy,
        success: bool,
    },
    GameOver {
        player_name: String,
        score: u32,
    },
}

impl View {
    /// Controls this view offers, in display order.
    ///
    /// The game loop races exactly these ids after presenting the view.
    pub fn controls(&self) -> Vec<TriggerId> {
        match self {
            Self::NamePrompt | Self::Welcome { .. } | Self::WeaponChosen { .. } => {
                vec![TriggerId::from(controls::CONFIRM)]
            }
            Self::WeaponSelect { weapons, .. } => {
                (0..weapons.len()).map(controls::weapon).collect()
            }
            Self::Encounter { .. } => vec![
                TriggerId::from(ActionKind::Attack.trigger_id()),
                TriggerId::from(ActionKind::Dodge.trigger_id()),
            ],
            Self::GameOver { .. } => vec![TriggerId::from(controls::RETRY)],
            Self::Roll { .. } | Self::AttackResult { .. } | Self::DodgeResult { .. } => Vec::new(),
        }
    }

    /// Text fields this view offers.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::NamePrompt => &[controls::NAME_FIELD],
            _ => &[],
        }
    }
}

/// Sink for presentation requests.
///
/// `present` is total and synchronous: the core never inspects a result and a
/// failure to paint is not modeled. Implementations are addressed by session
/// so several sessions, or headless tests, never share one display target.
pub trait PresentationPort: Send + Sync {
    fn present(&self, target: &SessionId, view: &View);
}

impl<P: PresentationPort + ?Sized> PresentationPort for Arc<P> {
    fn present(&self, target: &SessionId, view: &View) {
        (**self).present(target, view)
    }
}

/// Port that drops every view; for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardPresentation;

impl PresentationPort for DiscardPresentation {
    fn present(&self, target: &SessionId, view: &View) {
        tracing::trace!(%target, ?view, "Discarding view");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Catalog;

    #[test]
    fn weapon_controls_encode_catalog_position() {
        let catalog = Catalog::default();
        let view = View::WeaponSelect {
            player_name: "Ada".into(),
            weapons: catalog.weapons().to_vec(),
        };

        for (position, id) in view.controls().iter().enumerate() {
            assert_eq!(controls::weapon_index(id.as_str()), Some(position));
            assert_eq!(
                catalog.weapon(position),
                catalog.weapons().get(position),
                "control {id} must select weapon {position}"
            );
        }
        assert_eq!(view.controls().len(), 3);
    }

    #[test]
    fn weapon_index_rejects_foreign_ids() {
        assert_eq!(controls::weapon_index("weapon-12"), Some(12));
        assert_eq!(controls::weapon_index("weapon-x"), None);
        assert_eq!(controls::weapon_index("attack"), None);
    }

    #[test]
    fn encounter_offers_attack_then_dodge() {
        let view = View::Encounter {
            enemy: Enemy::new("Wolf", 4, 1),
            enemy_roll: 2,
            hit_points: 3,
            weapon: Weapon::new("Sword", 6, 12),
        };
        assert_eq!(
            view.controls(),
            vec![TriggerId::from("attack"), TriggerId::from("dodge")]
        );
        assert!(view.fields().is_empty());
    }

    #[test]
    fn only_the_name_prompt_has_a_field() {
        assert_eq!(View::NamePrompt.fields(), &[controls::NAME_FIELD]);
        assert_eq!(View::NamePrompt.controls(), vec![TriggerId::from("ok")]);
        assert!(
            View::Roll {
                enemy_roll: 1,
                player_roll: 2
            }
            .controls()
            .is_empty()
        );
    }
}
