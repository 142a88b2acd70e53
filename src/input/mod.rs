//! Input module - normalizes every input modality into [`GameAction`]s
//!
//! Three modalities feed the game:
//!
//! - [`keyboard`]: arrow keys / WASD steer, space pauses, enter starts
//! - [`swipe`]: pointer drag gestures; dominant axis picks the direction,
//!   sub-threshold release is a tap
//! - [`pad`]: the on-screen directional pad with a pause/resume button
//!
//! All of them end up calling [`SnakeGame::apply_action`], and every
//! direction intent passes the single reversal gate in `SnakeGame::steer`:
//! an intent opposite to the effective heading is dropped, never queued.
//!
//! [`GameAction`]: crate::types::GameAction
//! [`SnakeGame::apply_action`]: crate::core::SnakeGame::apply_action

pub mod keyboard;
pub mod pad;
pub mod swipe;

pub use keyboard::{handle_key_event, should_quit};
pub use pad::{PadButton, PadLayout};
pub use swipe::{SwipeOutcome, SwipeTracker};
