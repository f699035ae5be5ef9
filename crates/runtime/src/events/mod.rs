//! Topic-based event bus for runtime events.
//!
//! The game loop publishes progress here; frontends and tests subscribe to the
//! topics they care about. Nothing in the loop ever reads the bus back.

mod bus;
mod types;

pub use bus::{DEFAULT_CAPACITY, EventBus, Topic};
pub use types::GameEvent;
