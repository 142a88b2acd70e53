//! Terminal arcade snake with a local leaderboard.
//!
//! - [`core`]: the deterministic simulation (grid, snake, food, lives,
//!   lifecycle phases), advanced one [`core::SnakeGame::tick`] at a time
//! - [`input`]: keyboard, swipe and on-screen-pad routing into game actions
//! - [`term`]: framebuffer renderer and the game view
//! - [`store`]: the append-only leaderboard with pluggable persistence

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
