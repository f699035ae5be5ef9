//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Clear the display before painting each screen.
    pub clear_screen: bool,
    /// Show input hints below the controls.
    pub show_hints: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_hints: true,
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_CLEAR_SCREEN` - Clear the terminal between screens (default: true)
    /// - `CLI_SHOW_HINTS` - Show input hints (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(clear) = lookup("CLI_CLEAR_SCREEN").as_deref().and_then(parse_bool) {
            config.clear_screen = clear;
        }
        if let Some(show) = lookup("CLI_SHOW_HINTS").as_deref().and_then(parse_bool) {
            config.show_hints = show;
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
