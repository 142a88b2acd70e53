//! Game module - the snake simulation and its lifecycle
//!
//! [`SnakeGame`] owns the whole simulation state: body, heading, food, score,
//! lives and phase. It advances exclusively through [`SnakeGame::tick`], which
//! an external scheduler calls on a fixed cadence while the phase is
//! `Running`. Nothing here does I/O; rendering consumes snapshots.
//!
//! Lifecycle is a small phase machine:
//!
//! ```text
//! NotStarted -> Running <-> Paused
//! Running -> GameOver -> NotStarted   (automatic, same tick)
//! ```
//!
//! The `GameOver` leg is traversed inside the terminal tick itself: the
//! transition produces the one [`TickOutcome::GameOver`] value, then the
//! state is hard-reset and the phase lands back on `NotStarted`. Because the
//! notification is the transition, it cannot fire twice for one game.

use std::collections::VecDeque;

use crate::core::grid::{Grid, Step};
use crate::core::rng::SimpleRng;
use crate::types::{
    Direction, GameAction, GamePhase, Point, WallMode, FOOD_POINTS, FOOD_SAMPLE_ATTEMPTS,
    STARTING_LIVES,
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Phase was not `Running`; nothing happened
    Idle,
    /// Advanced one cell
    Moved,
    /// Advanced one cell onto food and grew
    Ate,
    /// Wall or self collision with lives remaining; round was soft-reset
    LifeLost,
    /// Last life lost; carries the score before the hard reset
    GameOver { final_score: u32 },
}

/// Complete simulation state for one game session
#[derive(Debug, Clone)]
pub struct SnakeGame {
    grid: Grid,
    rng: SimpleRng,
    /// Body segments, head first
    body: VecDeque<Point>,
    direction: Direction,
    /// Direction intent consumed at the start of the next tick
    pending: Option<Direction>,
    food: Point,
    score: u32,
    lives: u8,
    phase: GamePhase,
    /// Container activity signal; gates starting and forces pausing
    active: bool,
}

impl SnakeGame {
    /// Create a fresh game on the default grid with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_grid(Grid::default(), seed)
    }

    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let spawn = Self::spawn_point(&grid);
        let body = VecDeque::from([spawn]);
        let food = place_food(&mut rng, &grid, &body).unwrap_or(spawn);
        Self {
            grid,
            rng,
            body,
            direction: Direction::Right,
            pending: None,
            food,
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::NotStarted,
            active: true,
        }
    }

    fn spawn_point(grid: &Grid) -> Point {
        Point::new(grid.size() / 2, grid.size() / 2)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn head(&self) -> Point {
        // Body is never empty by construction
        *self.body.front().unwrap_or(&Point::new(0, 0))
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Route a normalized input action to the right transition
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Steer(dir) => self.steer(dir),
            GameAction::Start => {
                self.start();
            }
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
        }
    }

    /// Submit a direction intent.
    ///
    /// This is the single reversal gate for every input modality: an intent
    /// exactly opposite to the effective heading is dropped, never queued.
    /// The intent takes effect at the next tick.
    pub fn steer(&mut self, next: Direction) {
        if self.phase != GamePhase::Running {
            return;
        }
        let effective = self.pending.unwrap_or(self.direction);
        if effective.is_opposite(next) {
            return;
        }
        self.pending = Some(next);
    }

    /// `NotStarted -> Running`; refused while the container is inactive
    pub fn start(&mut self) -> bool {
        if !self.active || self.phase != GamePhase::NotStarted {
            return false;
        }
        self.phase = GamePhase::Running;
        true
    }

    /// `Running <-> Paused`; resuming is gated on container activity
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => self.phase = GamePhase::Paused,
            GamePhase::Paused if self.active => self.phase = GamePhase::Running,
            _ => {}
        }
    }

    /// Update the container activity signal.
    ///
    /// Deactivation force-pauses a running game. Reactivation never
    /// auto-resumes; the player must resume explicitly.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active && self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
        }
    }

    /// Hard reset back to `NotStarted` at any time
    pub fn reset(&mut self) {
        self.hard_reset();
        self.phase = GamePhase::NotStarted;
    }

    /// Place food at an exact cell, for scripted scenarios and tests.
    ///
    /// Returns false (leaving the food untouched) if the cell is off the
    /// grid or on the snake body.
    pub fn place_food(&mut self, p: Point) -> bool {
        if !self.grid.contains(p) || self.body.contains(&p) {
            return false;
        }
        self.food = p;
        true
    }

    /// Advance the simulation by one step.
    ///
    /// No-op unless the phase is `Running`. A wall or self collision is a
    /// terminal tick: it costs a life and discards any pending input. With
    /// lives remaining the round soft-resets (score kept); on the last life
    /// the game emits [`TickOutcome::GameOver`] exactly once, hard-resets,
    /// and returns to `NotStarted`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Idle;
        }

        if let Some(next) = self.pending.take() {
            self.direction = next;
        }

        let candidate = match self.grid.step(self.head(), self.direction) {
            Step::Inside(p) if !self.body.contains(&p) => p,
            _ => return self.terminal_tick(),
        };

        let ate = candidate == self.food;
        self.body.push_front(candidate);
        if !ate {
            self.body.pop_back();
            return TickOutcome::Moved;
        }

        self.score += FOOD_POINTS;
        match place_food(&mut self.rng, &self.grid, &self.body) {
            Some(food) => self.food = food,
            None => {
                // Grid completely filled: invariant violation, reset the round
                self.soft_reset();
            }
        }
        TickOutcome::Ate
    }

    fn terminal_tick(&mut self) -> TickOutcome {
        self.pending = None;
        self.lives -= 1;

        if self.lives > 0 {
            self.soft_reset();
            return TickOutcome::LifeLost;
        }

        // Running -> GameOver -> NotStarted, all within this tick. Emitting
        // the outcome here is the one-shot game-over notification.
        self.phase = GamePhase::GameOver;
        let final_score = self.score;
        self.hard_reset();
        self.phase = GamePhase::NotStarted;
        TickOutcome::GameOver { final_score }
    }

    /// Restore the initial layout, preserving score and lives
    fn soft_reset(&mut self) {
        let spawn = Self::spawn_point(&self.grid);
        self.body.clear();
        self.body.push_front(spawn);
        self.direction = Direction::Right;
        self.pending = None;
        if let Some(food) = place_food(&mut self.rng, &self.grid, &self.body) {
            self.food = food;
        }
    }

    /// Soft reset plus zeroed score and restored lives
    fn hard_reset(&mut self) {
        self.soft_reset();
        self.score = 0;
        self.lives = STARTING_LIVES;
    }
}

/// Pick a food cell not occupied by the body.
///
/// Rejection-samples up to [`FOOD_SAMPLE_ATTEMPTS`] times, then falls back to
/// a deterministic row-major scan so a near-full grid cannot stall the tick.
/// Returns `None` only when the body covers every cell.
fn place_food(rng: &mut SimpleRng, grid: &Grid, body: &VecDeque<Point>) -> Option<Point> {
    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let p = rng.next_cell(grid.size());
        if !body.contains(&p) {
            return Some(p);
        }
    }
    grid.cells().find(|p| !body.contains(p))
}
