//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::GameEvent;

/// Default per-topic buffer.
pub const DEFAULT_CAPACITY: usize = 64;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Session lifecycle (start, end)
    Session,
    /// Encounters and resolved actions
    Combat,
}

/// Topic-based event bus
///
/// Consumers subscribe to specific topics and only receive events they care
/// about. Cloning is cheap; clones publish into the same channels.
#[derive(Clone)]
pub struct EventBus {
    session: broadcast::Sender<GameEvent>,
    combat: broadcast::Sender<GameEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with the given capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        // broadcast::channel panics on zero capacity.
        let capacity = capacity.max(1);
        Self {
            session: broadcast::channel(capacity).0,
            combat: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<GameEvent> {
        match topic {
            Topic::Session => &self.session,
            Topic::Combat => &self.combat,
        }
    }

    /// Publish an event to its topic. Best-effort: nobody listening is fine.
    pub fn publish(&self, event: GameEvent) {
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.channel(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ActionKind, RollOutcome, RoundEffect};

    fn resolved() -> GameEvent {
        GameEvent::ActionResolved {
            kind: ActionKind::Dodge,
            outcome: RollOutcome::against(3, 5),
            effect: RoundEffect::Wounded { hit_points: 2 },
        }
    }

    #[tokio::test]
    async fn routes_events_by_topic() {
        let bus = EventBus::with_capacity(4);
        let mut combat = bus.subscribe(Topic::Combat);
        let mut session = bus.subscribe(Topic::Session);

        bus.publish(resolved());

        assert_eq!(combat.recv().await.unwrap(), resolved());
        assert!(session.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::with_capacity(0);
        bus.publish(resolved());
    }
}
