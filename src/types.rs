//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid side length in cells (the board is square)
pub const GRID_SIZE: i8 = 20;

/// Simulation cadence (milliseconds per tick)
pub const TICK_MS: u64 = 110;

/// Points awarded per food eaten
pub const FOOD_POINTS: u32 = 10;

/// Lives at the start of a game
pub const STARTING_LIVES: u8 = 3;

/// Minimum swipe displacement (logical pixels) to count as a direction
pub const SWIPE_THRESHOLD: i32 = 24;

/// Random food placement attempts before falling back to an exhaustive scan
pub const FOOD_SAMPLE_ATTEMPTS: u32 = 100;

/// Leaderboard display length
pub const LEADERBOARD_TOP: usize = 10;

/// A cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this heading; y grows downward
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True when `other` is the exact reversal of `self`
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// Boundary behavior at the grid edge.
///
/// `Solid` ends the current life on wall contact; `Wrap` re-enters on the
/// opposite side. Both are legitimate snake rules; `Solid` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallMode {
    #[default]
    Solid,
    Wrap,
}

/// Lifecycle phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Game actions produced by the input router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Steer(Direction),
    Start,
    TogglePause,
    Reset,
}
