//! Text inputs that forms fill before their confirm trigger fires.
//!
//! The game loop clears a field when it shows the form, so a value from an
//! earlier session never leaks into the next one.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Named text inputs written by frontends and read by the game loop.
#[derive(Clone, Default)]
pub struct FieldStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, field: &str, value: impl Into<String>) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(field.to_owned(), value.into());
    }

    /// Current value of `field`; an unset field reads as empty.
    pub fn read(&self, field: &str) -> String {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(field)
            .cloned()
            .unwrap_or_default()
    }

    pub fn clear(&self, field: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(field);
    }
}
