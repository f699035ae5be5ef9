//! Terminal frontend for the adventure game.
//!
//! The runtime paints through [`TerminalPresenter`] and the player answers on
//! stdin through [`CliFrontend`]. Both halves share the markup of the screen
//! currently shown, so typed input is interpreted against what the player
//! actually sees.
//!
//! ```no_run
//! # use client_frontend_cli::{CliFrontend, TerminalPresenter};
//! # use client_frontend_core::FrontendConfig;
//! let presenter = TerminalPresenter::stdout(FrontendConfig::default());
//! let frontend = CliFrontend::new(FrontendConfig::default(), presenter.subscribe());
//! ```

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;
pub use input::{InputAction, InputHandler, Submission};
pub use presentation::TerminalPresenter;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
