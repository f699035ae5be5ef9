//! Cloneable façade for driving the runtime from a frontend.
//!
//! [`RuntimeHandle`] hides the trigger board and field store behind a small
//! command surface (fire a control, fill a field) and offers event streaming
//! from specific topics.
use tokio::sync::{broadcast, watch};

use super::errors::Result;
use super::presentation::SessionId;
use crate::events::{EventBus, GameEvent, Topic};
use crate::triggers::{FieldStore, TriggerBoard, TriggerId};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    triggers: TriggerBoard,
    fields: FieldStore,
    event_bus: EventBus,
    session: SessionId,
}

impl RuntimeHandle {
    pub(crate) fn new(
        triggers: TriggerBoard,
        fields: FieldStore,
        event_bus: EventBus,
        session: SessionId,
    ) -> Self {
        Self {
            triggers,
            fields,
            event_bus,
            session,
        }
    }

    /// Fire a control. Returns `false` when the game is not waiting on it.
    pub fn fire(&self, id: &str) -> bool {
        self.triggers.fire(id)
    }

    /// Wait until the game arms `id`, then fire it.
    pub async fn click(&self, id: &str) -> Result<()> {
        self.triggers.click(id).await
    }

    /// Write a text field; read by the game after the confirming control fires.
    pub fn set_field(&self, field: &str, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Controls the game is currently waiting on.
    pub fn armed(&self) -> Vec<TriggerId> {
        self.triggers.armed()
    }

    /// Stream of armed control sets.
    pub fn watch_armed(&self) -> watch::Receiver<Vec<TriggerId>> {
        self.triggers.watch_armed()
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Session` - Session start and end
    /// - `Topic::Combat` - Encounters and resolved actions
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut combat_rx = handle.subscribe(Topic::Combat);
    /// while let Ok(event) = combat_rx.recv().await {
    ///     // Handle combat events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.event_bus.subscribe(topic)
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session
    }

    /// Stop the game: pending and future waits fail with
    /// [`RuntimeError::TriggersClosed`](super::RuntimeError::TriggersClosed).
    pub fn shutdown(&self) {
        self.triggers.close();
    }

    pub fn is_shut_down(&self) -> bool {
        self.triggers.is_closed()
    }
}
