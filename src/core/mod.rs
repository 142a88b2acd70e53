//! Core module - pure game logic with no external dependencies
//!
//! This module contains the simulation rules, state management, and lifecycle.
//! It has zero dependencies on UI, persistence, or I/O.

pub mod game;
pub mod grid;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use game::{SnakeGame, TickOutcome};
pub use grid::{Grid, Step};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
