//! Registry of armed triggers backing [`EventWaiter`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::{oneshot, watch};
use tracing::debug;

use super::{EventWaiter, TriggerId};
use crate::api::{Result, RuntimeError};

#[derive(Default)]
struct BoardState {
    next_race: u64,
    /// Armed trigger -> race it belongs to.
    armed: HashMap<TriggerId, u64>,
    /// Pending race -> resolver.
    races: HashMap<u64, oneshot::Sender<TriggerId>>,
    closed: bool,
}

impl BoardState {
    fn armed_ids(&self) -> Vec<TriggerId> {
        let mut ids: Vec<TriggerId> = self.armed.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Remove every registration of `race`; returns its resolver if it was still pending.
    fn disarm_race(&mut self, race: u64) -> Option<oneshot::Sender<TriggerId>> {
        let resolver = self.races.remove(&race)?;
        self.armed.retain(|_, owner| *owner != race);
        Some(resolver)
    }
}

/// Shared board of single-shot trigger registrations.
///
/// Cloning is cheap; clones share the same registrations. The game loop
/// waits on it while frontends fire triggers through
/// [`RuntimeHandle`](crate::RuntimeHandle).
#[derive(Clone)]
pub struct TriggerBoard {
    state: Arc<Mutex<BoardState>>,
    armed_tx: Arc<watch::Sender<Vec<TriggerId>>>,
}

impl TriggerBoard {
    pub fn new() -> Self {
        let (armed_tx, _) = watch::channel(Vec::new());
        Self {
            state: Arc::new(Mutex::new(BoardState::default())),
            armed_tx: Arc::new(armed_tx),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &BoardState) {
        self.armed_tx.send_replace(state.armed_ids());
    }

    /// Fire `id`. Returns `false` when no pending wait registered it.
    ///
    /// The first candidate of a race to fire resolves the wait; the rest of
    /// that race is disarmed in the same step.
    pub fn fire(&self, id: &str) -> bool {
        let resolver = {
            let mut state = self.lock();
            let Some(race) = state.armed.get(id).copied() else {
                debug!(trigger = id, "Ignoring trigger with no pending wait");
                return false;
            };
            let resolver = state.disarm_race(race);
            self.publish(&state);
            resolver
        };

        match resolver {
            Some(resolver) => {
                debug!(trigger = id, "Trigger fired");
                resolver.send(TriggerId::new(id)).is_ok()
            }
            None => false,
        }
    }

    /// Wait until `id` is armed, then fire it.
    pub async fn click(&self, id: &str) -> Result<()> {
        let mut armed = self.watch_armed();
        loop {
            if self.is_closed() {
                return Err(RuntimeError::TriggersClosed);
            }
            if self.fire(id) {
                return Ok(());
            }
            armed
                .changed()
                .await
                .map_err(|_| RuntimeError::TriggersClosed)?;
        }
    }

    /// Currently armed trigger ids, sorted.
    pub fn armed(&self) -> Vec<TriggerId> {
        self.lock().armed_ids()
    }

    /// Watch the armed id set; updated on every arm, fire, and teardown.
    pub fn watch_armed(&self) -> watch::Receiver<Vec<TriggerId>> {
        self.armed_tx.subscribe()
    }

    /// Close the board: pending waits fail with [`RuntimeError::TriggersClosed`]
    /// and no new waits can be registered.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.armed.clear();
        state.races.clear();
        self.publish(&state);
        debug!("Trigger board closed");
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

impl Default for TriggerBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes a race's registrations when its wait is dropped unresolved.
struct RaceGuard<'a> {
    board: &'a TriggerBoard,
    race: u64,
}

impl Drop for RaceGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.board.lock();
        if state.disarm_race(self.race).is_some() {
            self.board.publish(&state);
            debug!(race = self.race, "Disarmed abandoned wait");
        }
    }
}

#[async_trait]
impl EventWaiter for TriggerBoard {
    async fn await_one(&self, candidates: &[TriggerId]) -> Result<TriggerId> {
        if candidates.is_empty() {
            return Err(RuntimeError::NoCandidates);
        }

        let (race, resolved) = {
            let mut state = self.lock();
            if state.closed {
                return Err(RuntimeError::TriggersClosed);
            }
            if let Some(taken) = candidates.iter().find(|id| state.armed.contains_key(*id)) {
                return Err(RuntimeError::AlreadyArmed(taken.clone()));
            }

            let race = state.next_race;
            state.next_race += 1;

            let (resolver, resolved) = oneshot::channel();
            for id in candidates {
                state.armed.insert(id.clone(), race);
            }
            state.races.insert(race, resolver);
            self.publish(&state);
            (race, resolved)
        };

        debug!(race, ?candidates, "Armed triggers");
        let _guard = RaceGuard { board: self, race };

        resolved.await.map_err(|_| RuntimeError::TriggersClosed)
    }
}
