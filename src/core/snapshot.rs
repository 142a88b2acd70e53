//! Read-only view of the simulation for the render path.
//!
//! The renderer never touches live state; it consumes a [`GameSnapshot`]
//! captured after each tick. `snapshot_into` reuses the segment allocation
//! so per-frame capture does not allocate in steady state.

use crate::core::game::SnakeGame;
use crate::types::{Direction, GamePhase, Point, WallMode};

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid_size: i8,
    pub wall_mode: WallMode,
    /// Body segments, head first
    pub body: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub lives: u8,
    pub phase: GamePhase,
    pub active: bool,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running && self.active
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid_size: 0,
            wall_mode: WallMode::Solid,
            body: Vec::new(),
            food: Point::new(0, 0),
            direction: Direction::Right,
            score: 0,
            lives: 0,
            phase: GamePhase::NotStarted,
            active: true,
        }
    }
}

impl SnakeGame {
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_size = self.grid().size();
        out.wall_mode = self.grid().wall_mode();
        out.body.clear();
        out.body.extend(self.body().iter().copied());
        out.food = self.food();
        out.direction = self.direction();
        out.score = self.score();
        out.lives = self.lives();
        out.phase = self.phase();
        out.active = self.is_active();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
