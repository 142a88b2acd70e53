//! Swipe/drag gesture recognition.
//!
//! Tracks the start point of a pointer gesture and classifies it on release:
//! the axis with the larger absolute displacement picks the direction, its
//! sign the polarity. Displacement under the threshold on both axes is a tap
//! (which starts the game when it is not started yet).
//!
//! Coordinates are whatever the caller's pointer space is; the default
//! threshold assumes logical pixels. The terminal binary feeds it mouse
//! drags in cell coordinates with a smaller threshold.

use crate::types::{Direction, SWIPE_THRESHOLD};

/// Classified gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Steer(Direction),
    Tap,
}

/// Tracks one in-flight pointer gesture
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    threshold: i32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    /// Use a custom minimum displacement, e.g. for coarse cell coordinates
    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            start: None,
            threshold: threshold.max(1),
        }
    }

    /// Record the press/touch-down point
    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Drop any in-flight gesture
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Classify the gesture on release.
    ///
    /// Returns `None` when no gesture was in flight.
    pub fn end(&mut self, x: i32, y: i32) -> Option<SwipeOutcome> {
        let (sx, sy) = self.start.take()?;
        let dx = x - sx;
        let dy = y - sy;

        if dx.abs() < self.threshold && dy.abs() < self.threshold {
            return Some(SwipeOutcome::Tap);
        }

        let dir = if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        };
        Some(SwipeOutcome::Steer(dir))
    }
}
