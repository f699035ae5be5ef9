//! Client runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::events::DEFAULT_CAPACITY;
use runtime::{PacingConfig, RuntimeConfig, SessionId};

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub session_id: Option<String>,
    pub seed: Option<u64>,
    pub catalog_path: Option<PathBuf>,
    pub pacing: PacingConfig,
    pub event_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            seed: None,
            catalog_path: None,
            pacing: PacingConfig::default(),
            event_buffer_size: DEFAULT_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_SESSION_ID` - Display target identity (default: auto-generated)
    /// - `GAME_SEED` - Seed for enemy and player rolls (default: random)
    /// - `CATALOG_PATH` - RON or JSON catalog file (default: bundled catalog)
    /// - `ROLL_PREVIEW_STEPS` - Cosmetic frames before the real roll (default: 10)
    /// - `ROLL_FRAME_MS` - Delay between roll frames (default: 100)
    /// - `ROLL_REVEAL_MS` - Delay before showing the result (default: 1000)
    /// - `ATTACK_HOLD_MS` - Attack result display time (default: 2500)
    /// - `DODGE_HOLD_MS` - Dodge result display time (default: 1500)
    /// - `EVENT_BUS_CAPACITY` - Per-topic event buffer (default: 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read_ms = |key: &str| read_env::<u64>(&lookup, key).map(Duration::from_millis);
        let mut config = Self::default();

        config.session_id = lookup("GAME_SESSION_ID").filter(|id| !id.trim().is_empty());
        config.seed = read_env(&lookup, "GAME_SEED");
        config.catalog_path = lookup("CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        // Pacing
        if let Some(steps) = read_env::<usize>(&lookup, "ROLL_PREVIEW_STEPS") {
            config.pacing.preview_steps = steps;
        }
        if let Some(interval) = read_ms("ROLL_FRAME_MS") {
            config.pacing.frame_interval = interval;
        }
        if let Some(delay) = read_ms("ROLL_REVEAL_MS") {
            config.pacing.reveal_delay = delay;
        }
        if let Some(hold) = read_ms("ATTACK_HOLD_MS") {
            config.pacing.attack_hold = hold;
        }
        if let Some(hold) = read_ms("DODGE_HOLD_MS") {
            config.pacing.dodge_hold = hold;
        }

        if let Some(capacity) = read_env::<usize>(&lookup, "EVENT_BUS_CAPACITY") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    /// Runtime settings derived from this configuration.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            session_id: self
                .session_id
                .as_deref()
                .map(SessionId::new)
                .unwrap_or_else(SessionId::generate),
            seed: self.seed,
            pacing: self.pacing.clone(),
            event_buffer_size: self.event_buffer_size,
        }
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
