//! Game loop worker that owns the session's [`Phase`].
//!
//! Gathers one [`PhaseInput`] per suspension point (presenting a view, waiting
//! on its controls, rolling), feeds it to [`Phase::advance`], and publishes the
//! outcome to the EventBus.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use game_core::{
    ActionKind, Catalog, Phase, PhaseInput, PhaseKind, Randomizer, RollFrame, RollOutcome,
    SessionState, SessionSummary, Transition, animated_roll_preview, resolve_action,
};
use tracing::{debug, info};

use crate::api::{PresentationPort, Result, RuntimeError, SessionId, View, controls};
use crate::events::{EventBus, GameEvent};
use crate::runtime::PacingConfig;
use crate::triggers::{EventWaiter, FieldStore, TriggerId};

/// Long-lived task driving sessions back to back.
///
/// # Design Note
///
/// Rules live in `game_core`; this worker only performs I/O around them:
/// presentation, trigger waits, dice, and pacing sleeps.
pub struct GameLoop {
    catalog: Arc<Catalog>,
    waiter: Arc<dyn EventWaiter>,
    fields: FieldStore,
    presenter: Arc<dyn PresentationPort>,
    rng: Box<dyn Randomizer>,
    preview_rng: Box<dyn Randomizer>,
    pacing: PacingConfig,
    events: EventBus,
    session: SessionId,
}

/// Collaborators of a [`GameLoop`].
pub struct GameLoopParts {
    pub catalog: Arc<Catalog>,
    pub waiter: Arc<dyn EventWaiter>,
    pub fields: FieldStore,
    pub presenter: Arc<dyn PresentationPort>,
    pub rng: Box<dyn Randomizer>,
    pub preview_rng: Box<dyn Randomizer>,
    pub pacing: PacingConfig,
    pub events: EventBus,
    pub session: SessionId,
}

impl GameLoop {
    pub fn new(parts: GameLoopParts) -> Self {
        info!(
            session = %parts.session,
            weapons = parts.catalog.weapons().len(),
            enemies = parts.catalog.enemies().len(),
            "GameLoop initialized"
        );

        Self {
            catalog: parts.catalog,
            waiter: parts.waiter,
            fields: parts.fields,
            presenter: parts.presenter,
            rng: parts.rng,
            preview_rng: parts.preview_rng,
            pacing: parts.pacing,
            events: parts.events,
            session: parts.session,
        }
    }

    /// Run sessions forever; returns only on error, shutdown included.
    pub async fn run(&mut self) -> Result<Infallible> {
        loop {
            let summary = self.run_session().await?;
            info!(
                player = %summary.player_name,
                score = summary.score,
                defeated = summary.enemies_defeated,
                "Session finished; starting over"
            );
        }
    }

    /// Play one session from the name prompt until the player retries after
    /// game over.
    pub async fn run_session(&mut self) -> Result<SessionSummary> {
        let mut phase = Phase::NamePrompt;

        loop {
            let from = phase.kind();
            debug!(phase = %from, "Entering phase");

            let input = match &phase {
                Phase::NamePrompt => PhaseInput::NameEntered(self.prompt_name().await?),
                Phase::WeaponSelect { player_name } => {
                    PhaseInput::WeaponChosen(self.choose_weapon(player_name).await?)
                }
                Phase::Encounter(session) => PhaseInput::EnemyRolled(self.roll_enemy(session)),
                Phase::CombatRound {
                    session,
                    enemy_roll,
                } => {
                    let (kind, outcome) = self.fight(session, *enemy_roll).await?;
                    PhaseInput::ActionResolved { kind, outcome }
                }
                Phase::GameOver(summary) => {
                    self.await_retry(summary).await?;
                    PhaseInput::Retry
                }
            };

            let finished = match &phase {
                Phase::GameOver(summary) => Some(summary.clone()),
                _ => None,
            };
            let resolved = match &input {
                PhaseInput::ActionResolved { kind, outcome } => Some((*kind, *outcome)),
                _ => None,
            };

            let transition = phase.advance(input, &self.catalog)?;
            self.publish_transition(from, resolved, &transition);
            phase = transition.phase;

            if let Some(summary) = finished {
                return Ok(summary);
            }
        }
    }

    fn present(&self, view: &View) {
        self.presenter.present(&self.session, view);
    }

    /// Present `view` and suspend until one of its controls fires.
    async fn show_and_wait(&mut self, view: View) -> Result<TriggerId> {
        self.present(&view);
        let candidates = view.controls();
        self.waiter.await_one(&candidates).await
    }

    async fn prompt_name(&mut self) -> Result<String> {
        self.fields.clear(controls::NAME_FIELD);
        self.show_and_wait(View::NamePrompt).await?;

        let player_name = self.fields.read(controls::NAME_FIELD);
        info!(player = %player_name, "Name entered");

        self.show_and_wait(View::Welcome {
            player_name: player_name.clone(),
        })
        .await?;
        Ok(player_name)
    }

    async fn choose_weapon(&mut self, player_name: &str) -> Result<usize> {
        let chosen = self
            .show_and_wait(View::WeaponSelect {
                player_name: player_name.to_owned(),
                weapons: self.catalog.weapons().to_vec(),
            })
            .await?;

        let (index, weapon) = controls::weapon_index(chosen.as_str())
            .and_then(|index| Some((index, self.catalog.weapon(index)?.clone())))
            .ok_or_else(|| RuntimeError::UnexpectedTrigger(chosen.clone()))?;
        info!(weapon = %weapon.name, index, "Weapon chosen");

        self.show_and_wait(View::WeaponChosen { weapon }).await?;
        Ok(index)
    }

    fn roll_enemy(&mut self, session: &SessionState) -> u32 {
        let enemy = session.current_enemy(&self.catalog);
        let enemy_roll = self.rng.int_in_range(enemy.strength);
        debug!(enemy = %enemy.name, enemy_roll, "Enemy rolled");

        self.events.publish(GameEvent::EnemyEncountered {
            enemy: enemy.clone(),
            enemy_roll,
            hit_points: session.hit_points(),
        });
        enemy_roll
    }

    async fn fight(
        &mut self,
        session: &SessionState,
        enemy_roll: u32,
    ) -> Result<(ActionKind, RollOutcome)> {
        let enemy = session.current_enemy(&self.catalog).clone();
        let weapon = session.weapon();

        let chosen = self
            .show_and_wait(View::Encounter {
                enemy: enemy.clone(),
                enemy_roll,
                hit_points: session.hit_points(),
                weapon: weapon.clone(),
            })
            .await?;
        let kind = ActionKind::from_trigger(chosen.as_str())
            .ok_or_else(|| RuntimeError::UnexpectedTrigger(chosen.clone()))?;

        let outcome = resolve_action(kind, weapon, enemy_roll, &mut *self.rng);
        debug!(%kind, roll = outcome.roll, enemy_roll, success = outcome.success, "Action resolved");

        let frames: Vec<RollFrame> = animated_roll_preview(
            &mut *self.preview_rng,
            kind.roll_max(weapon),
            outcome.roll,
            self.pacing.preview_steps,
        )
        .collect();
        for frame in frames {
            self.present(&View::Roll {
                enemy_roll,
                player_roll: frame.roll,
            });
            pause(self.pacing.frame_interval).await;
        }
        pause(self.pacing.reveal_delay).await;

        let success = outcome.success;
        let (result, hold) = match kind {
            ActionKind::Attack => (View::AttackResult { enemy, success }, self.pacing.attack_hold),
            ActionKind::Dodge => (View::DodgeResult { enemy, success }, self.pacing.dodge_hold),
        };
        self.present(&result);
        pause(hold).await;

        Ok((kind, outcome))
    }

    async fn await_retry(&mut self, summary: &SessionSummary) -> Result<()> {
        self.show_and_wait(View::GameOver {
            player_name: summary.player_name.clone(),
            score: summary.score,
        })
        .await?;
        info!(player = %summary.player_name, "Retry requested");
        Ok(())
    }

    fn publish_transition(
        &self,
        from: PhaseKind,
        resolved: Option<(ActionKind, RollOutcome)>,
        transition: &Transition,
    ) {
        if let (Some((kind, outcome)), Some(effect)) = (resolved, transition.effect) {
            debug!(%kind, ?effect, "Round applied");
            self.events.publish(GameEvent::ActionResolved {
                kind,
                outcome,
                effect,
            });
        }

        match (from, &transition.phase) {
            (PhaseKind::WeaponSelect, Phase::Encounter(session)) => {
                info!(
                    player = %session.player_name(),
                    weapon = %session.weapon().name,
                    "Session started"
                );
                self.events.publish(GameEvent::SessionStarted {
                    session: self.session.clone(),
                    player_name: session.player_name().to_owned(),
                    weapon: session.weapon().clone(),
                });
            }
            (PhaseKind::CombatRound, Phase::GameOver(summary)) => {
                info!(
                    player = %summary.player_name,
                    score = summary.score,
                    "Game over"
                );
                self.events.publish(GameEvent::SessionEnded {
                    session: self.session.clone(),
                    summary: summary.clone(),
                });
            }
            _ => {}
        }
    }
}

/// Sleep for `duration`; zero skips the timer entirely.
async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
