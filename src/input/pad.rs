//! On-screen directional pad.
//!
//! A cross of four direction buttons around a pause/resume button. The view
//! draws the pad from [`PadLayout`]; mouse clicks resolve back to buttons
//! through the same layout, so drawing and hit-testing cannot drift apart.

use crate::types::{Direction, GameAction};

/// Width of one pad button in terminal columns
pub const BUTTON_W: u16 = 5;
/// Height of one pad button in terminal rows
pub const BUTTON_H: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    Up,
    Down,
    Left,
    Right,
    PauseResume,
}

impl PadButton {
    /// All buttons with their (column, row) slot in the 3x3 pad cross
    pub const SLOTS: [(PadButton, u16, u16); 5] = [
        (PadButton::Up, 1, 0),
        (PadButton::Left, 0, 1),
        (PadButton::PauseResume, 1, 1),
        (PadButton::Right, 2, 1),
        (PadButton::Down, 1, 2),
    ];

    /// The action this button emits
    pub fn action(self) -> GameAction {
        match self {
            PadButton::Up => GameAction::Steer(Direction::Up),
            PadButton::Down => GameAction::Steer(Direction::Down),
            PadButton::Left => GameAction::Steer(Direction::Left),
            PadButton::Right => GameAction::Steer(Direction::Right),
            PadButton::PauseResume => GameAction::TogglePause,
        }
    }

    /// Button label; the center button mirrors the running state
    pub fn glyph(self, running: bool) -> char {
        match self {
            PadButton::Up => '↑',
            PadButton::Down => '↓',
            PadButton::Left => '←',
            PadButton::Right => '→',
            PadButton::PauseResume => {
                if running {
                    '⏸'
                } else {
                    '▶'
                }
            }
        }
    }
}

/// Screen placement of the pad, shared by view and hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadLayout {
    pub origin_x: u16,
    pub origin_y: u16,
}

impl PadLayout {
    pub fn new(origin_x: u16, origin_y: u16) -> Self {
        Self { origin_x, origin_y }
    }

    /// Total pad extent in terminal cells
    pub fn extent(&self) -> (u16, u16) {
        (3 * BUTTON_W, 3 * BUTTON_H)
    }

    /// Top-left cell of a button slot
    pub fn button_origin(&self, slot_x: u16, slot_y: u16) -> (u16, u16) {
        (
            self.origin_x + slot_x * BUTTON_W,
            self.origin_y + slot_y * BUTTON_H,
        )
    }

    /// Resolve a terminal cell to the button covering it
    pub fn hit(&self, x: u16, y: u16) -> Option<PadButton> {
        for (button, sx, sy) in PadButton::SLOTS {
            let (bx, by) = self.button_origin(sx, sy);
            if x >= bx && x < bx + BUTTON_W && y >= by && y < by + BUTTON_H {
                return Some(button);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_emit_expected_actions() {
        assert_eq!(PadButton::Up.action(), GameAction::Steer(Direction::Up));
        assert_eq!(PadButton::Down.action(), GameAction::Steer(Direction::Down));
        assert_eq!(PadButton::Left.action(), GameAction::Steer(Direction::Left));
        assert_eq!(
            PadButton::Right.action(),
            GameAction::Steer(Direction::Right)
        );
        assert_eq!(PadButton::PauseResume.action(), GameAction::TogglePause);
    }

    #[test]
    fn pause_button_mirrors_running_state() {
        assert_eq!(PadButton::PauseResume.glyph(true), '⏸');
        assert_eq!(PadButton::PauseResume.glyph(false), '▶');
    }

    #[test]
    fn hit_resolves_each_button() {
        let layout = PadLayout::new(10, 5);
        for (button, sx, sy) in PadButton::SLOTS {
            let (bx, by) = layout.button_origin(sx, sy);
            // Anywhere inside the button rect resolves to it
            assert_eq!(layout.hit(bx, by), Some(button));
            assert_eq!(layout.hit(bx + BUTTON_W - 1, by), Some(button));
        }
    }

    #[test]
    fn hit_misses_empty_corners() {
        let layout = PadLayout::new(10, 5);
        // Top-left corner of the 3x3 cross has no button
        assert_eq!(layout.hit(10, 5), None);
        // Outside the pad entirely
        assert_eq!(layout.hit(0, 0), None);
    }
}
