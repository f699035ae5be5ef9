//! Cross-frontend primitives for presenting the game.
//!
//! Houses the [`Frontend`] trait, the pure view-to-markup renderer, and
//! configuration that both the terminal client and future graphical clients
//! can reuse.
pub mod config;
pub mod frontend;
pub mod markup;

pub use config::FrontendConfig;
pub use frontend::Frontend;
pub use markup::{Control, Field, Line, Markup, Tone, render};
