//! Grid module - board geometry and boundary policy
//!
//! The board is a square grid of `size * size` cells with integer coordinates
//! in `[0, size)` on both axes. The grid itself holds no occupancy state (the
//! snake body is the only occupancy there is); it answers geometric questions:
//! whether a point is in bounds, and where a step in some direction lands
//! under the configured [`WallMode`].

use crate::types::{Direction, Point, WallMode, GRID_SIZE};

/// Result of advancing one cell from a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Landed on this cell (possibly wrapped)
    Inside(Point),
    /// Left the grid under [`WallMode::Solid`]
    Blocked,
}

/// Square playfield geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i8,
    wall_mode: WallMode,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_SIZE, WallMode::default())
    }
}

impl Grid {
    pub fn new(size: i8, wall_mode: WallMode) -> Self {
        debug_assert!(size > 0);
        Self { size, wall_mode }
    }

    pub fn size(&self) -> i8 {
        self.size
    }

    pub fn wall_mode(&self) -> WallMode {
        self.wall_mode
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size && p.y >= 0 && p.y < self.size
    }

    /// Advance one cell from `from` in `dir`, applying the boundary policy
    pub fn step(&self, from: Point, dir: Direction) -> Step {
        let (dx, dy) = dir.delta();
        let raw = Point::new(from.x + dx, from.y + dy);

        if self.contains(raw) {
            return Step::Inside(raw);
        }

        match self.wall_mode {
            WallMode::Solid => Step::Blocked,
            WallMode::Wrap => Step::Inside(Point::new(
                (raw.x + self.size) % self.size,
                (raw.y + self.size) % self.size,
            )),
        }
    }

    /// Iterate every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }
}
