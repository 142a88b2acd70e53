//! Simulation engine tests - movement, food, collisions, resets

use tui_snake::core::{Grid, SnakeGame, TickOutcome};
use tui_snake::types::{Direction, GamePhase, Point, WallMode, FOOD_POINTS, STARTING_LIVES};

fn running_game(seed: u32) -> SnakeGame {
    let mut game = SnakeGame::new(seed);
    game.start();
    // Park the food in a corner so scripted paths stay food-free
    assert!(game.place_food(Point::new(0, 0)));
    game
}

/// Grow the snake by `n` segments by feeding it along its current row.
fn grow_by(game: &mut SnakeGame, n: usize) {
    for _ in 0..n {
        let head = game.head();
        assert!(game.place_food(Point::new(head.x + 1, head.y)));
        assert_eq!(game.tick(), TickOutcome::Ate);
    }
    assert!(game.place_food(Point::new(0, 0)));
}

#[test]
fn five_ticks_reach_the_food() {
    // Head (10,10) heading right, food five cells away at (15,10)
    let mut game = running_game(1);
    assert_eq!(game.head(), Point::new(10, 10));
    assert!(game.place_food(Point::new(15, 10)));

    for _ in 0..4 {
        assert_eq!(game.tick(), TickOutcome::Moved);
    }
    assert_eq!(game.tick(), TickOutcome::Ate);

    assert_eq!(game.head(), Point::new(15, 10));
    assert_eq!(game.score(), FOOD_POINTS);
    assert_eq!(game.body().len(), 2);
    assert_ne!(game.food(), Point::new(15, 10));
    assert!(!game.body().contains(&game.food()));
}

#[test]
fn length_grows_only_on_food() {
    let mut game = running_game(7);
    let len = game.body().len();

    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.body().len(), len);

    grow_by(&mut game, 1);
    assert_eq!(game.body().len(), len + 1);
}

#[test]
fn food_never_respawns_on_the_body() {
    let mut game = running_game(1234);

    // Eat on every tick along a non-revisiting path: right to the wall,
    // one row down, left to the wall, one row down.
    let mut script = Vec::new();
    script.extend(std::iter::repeat(Direction::Right).take(9));
    script.push(Direction::Down);
    script.extend(std::iter::repeat(Direction::Left).take(19));
    script.push(Direction::Down);

    for dir in script {
        let head = game.head();
        let (dx, dy) = dir.delta();
        assert!(game.place_food(Point::new(head.x + dx, head.y + dy)));
        game.steer(dir);
        assert_eq!(game.tick(), TickOutcome::Ate);
        assert!(
            !game.body().contains(&game.food()),
            "food {:?} landed on the body",
            game.food()
        );
    }
    assert_eq!(game.body().len(), 31);
}

#[test]
fn wall_collision_costs_a_life_and_soft_resets() {
    let mut game = running_game(1);
    let score_food = game.head();
    assert!(game.place_food(Point::new(score_food.x + 1, score_food.y)));
    game.tick(); // eat once so the score is nonzero
    assert!(game.place_food(Point::new(0, 0)));

    // Head is at (11,10) heading right; the wall is at x = 19
    let mut outcome = TickOutcome::Idle;
    for _ in 0..9 {
        outcome = game.tick();
    }
    assert_eq!(outcome, TickOutcome::LifeLost);
    assert_eq!(game.lives(), STARTING_LIVES - 1);

    // Soft reset: layout restored, score preserved, still running
    assert_eq!(game.head(), Point::new(10, 10));
    assert_eq!(game.body().len(), 1);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.score(), FOOD_POINTS);
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn self_collision_is_terminal() {
    let mut game = running_game(1);
    grow_by(&mut game, 4);
    assert_eq!(game.body().len(), 5);

    // Hook back into the body: up, left, then down
    game.steer(Direction::Up);
    assert_eq!(game.tick(), TickOutcome::Moved);
    game.steer(Direction::Left);
    assert_eq!(game.tick(), TickOutcome::Moved);
    game.steer(Direction::Down);
    assert_eq!(game.tick(), TickOutcome::LifeLost);
    assert_eq!(game.lives(), STARTING_LIVES - 1);
}

#[test]
fn pending_input_does_not_survive_a_terminal_tick() {
    let mut game = running_game(1);

    // Drive into the bottom-right corner
    game.steer(Direction::Down);
    for _ in 0..9 {
        assert_eq!(game.tick(), TickOutcome::Moved);
    }
    assert_eq!(game.head(), Point::new(10, 19));
    game.steer(Direction::Right);
    for _ in 0..9 {
        assert_eq!(game.tick(), TickOutcome::Moved);
    }
    assert_eq!(game.head(), Point::new(19, 19));

    // The steer consumed by the terminal tick is gone with the round
    game.steer(Direction::Down);
    assert_eq!(game.tick(), TickOutcome::LifeLost);
    assert_eq!(game.direction(), Direction::Right);
    assert!(game.place_food(Point::new(0, 0)));
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.head(), Point::new(11, 10));
}

#[test]
fn game_over_fires_exactly_once_with_the_final_score() {
    let mut game = running_game(1);
    let food = game.head();
    assert!(game.place_food(Point::new(food.x + 1, food.y)));
    game.tick();
    assert!(game.place_food(Point::new(0, 0)));
    let expected = game.score();

    let mut game_overs = Vec::new();
    // Crash into the right wall three times
    for _ in 0..3 * 12 {
        match game.tick() {
            TickOutcome::GameOver { final_score } => game_overs.push(final_score),
            // Keep the food out of the crash path after each soft reset
            TickOutcome::LifeLost => assert!(game.place_food(Point::new(0, 0))),
            _ => {}
        }
        if game.phase() != GamePhase::Running {
            break;
        }
    }

    assert_eq!(game_overs, vec![expected]);

    // Hard reset happened inside the terminal tick
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), STARTING_LIVES);

    // Further ticks are idle, never another game-over
    for _ in 0..10 {
        assert_eq!(game.tick(), TickOutcome::Idle);
    }
}

#[test]
fn two_full_games_emit_two_game_overs() {
    let mut game = running_game(1);

    let mut emitted = 0;
    for _ in 0..2 {
        assert!(game.start() || game.is_running());
        loop {
            match game.tick() {
                TickOutcome::GameOver { .. } => {
                    emitted += 1;
                    break;
                }
                TickOutcome::Idle => panic!("game stalled"),
                _ => {}
            }
        }
    }
    assert_eq!(emitted, 2);
}

#[test]
fn wrap_mode_crosses_the_edge_without_losing_a_life() {
    let mut game = SnakeGame::with_grid(Grid::new(20, WallMode::Wrap), 1);
    game.start();
    assert!(game.place_food(Point::new(0, 0)));

    for _ in 0..10 {
        let outcome = game.tick();
        assert!(matches!(outcome, TickOutcome::Moved | TickOutcome::Ate));
    }

    assert_eq!(game.head(), Point::new(0, 10));
    assert_eq!(game.lives(), STARTING_LIVES);
}

#[test]
fn reversal_never_changes_the_effective_direction() {
    let mut game = running_game(1);

    for dir in [Direction::Left, Direction::Left, Direction::Left] {
        game.steer(dir);
    }
    game.tick();
    assert_eq!(game.direction(), Direction::Right);

    // Also when stacked behind a legal turn
    game.steer(Direction::Up);
    game.steer(Direction::Down);
    game.tick();
    assert_eq!(game.direction(), Direction::Up);
}
