//! Single-shot user triggers and the waits that race them.
//!
//! Frontends fire triggers by control id (a button click, a key press). The
//! game loop suspends on [`EventWaiter::await_one`] until one of the ids it
//! registered fires. Text inputs live next to the triggers in [`FieldStore`]
//! because a form's value is read right after its confirm trigger fires.

mod board;
mod fields;

pub use board::TriggerBoard;
pub use fields::FieldStore;

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::api::Result;

/// Identifier of an externally fired control.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(Arc<str>);

impl TriggerId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TriggerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TriggerId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl Borrow<str> for TriggerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TriggerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TriggerId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for TriggerId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Suspends the calling task until one external trigger fires.
///
/// Implementations must guarantee:
/// - exactly one candidate resolves a wait, the first one to fire;
/// - every registration is single-shot, and the losers of a race are torn
///   down when it resolves;
/// - dropping the returned future removes its registrations;
/// - no timeout: the wait lasts until a trigger fires or the source closes.
#[async_trait]
pub trait EventWaiter: Send + Sync {
    async fn await_one(&self, candidates: &[TriggerId]) -> Result<TriggerId>;
}
