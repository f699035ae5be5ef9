//! Worker tasks that back the runtime orchestration.
//!
//! The game loop worker owns the phase machine and performs every suspension
//! the game needs.

mod game_loop;

pub use game_loop::{GameLoop, GameLoopParts};
