//! Terminal "game renderer" module.
//!
//! The render path is deliberately split in three:
//! [`fb`] is a plain styled-character framebuffer, [`game_view`] maps a
//! simulation snapshot into one (pure, unit-testable), and [`renderer`]
//! flushes framebuffers to the terminal with cell diffing. `core` stays
//! deterministic and free of I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Overlay, ViewLayout, Viewport};
pub use renderer::TerminalRenderer;
