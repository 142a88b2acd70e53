//! Lifecycle tests - phase machine, activity gating, action routing

use tui_snake::core::{SnakeGame, TickOutcome};
use tui_snake::types::{Direction, GameAction, GamePhase, Point, STARTING_LIVES};

#[test]
fn phases_walk_the_expected_path() {
    let mut game = SnakeGame::new(9);
    assert_eq!(game.phase(), GamePhase::NotStarted);

    assert!(game.start());
    assert_eq!(game.phase(), GamePhase::Running);

    game.toggle_pause();
    assert_eq!(game.phase(), GamePhase::Paused);

    game.toggle_pause();
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn start_is_refused_while_container_inactive() {
    let mut game = SnakeGame::new(9);
    game.set_active(false);

    assert!(!game.start());
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert_eq!(game.tick(), TickOutcome::Idle);
}

#[test]
fn losing_the_container_force_pauses() {
    let mut game = SnakeGame::new(9);
    game.start();

    game.set_active(false);
    assert_eq!(game.phase(), GamePhase::Paused);

    // Coming back does not resume on its own
    game.set_active(true);
    assert_eq!(game.phase(), GamePhase::Paused);

    // And an explicit resume works again
    game.apply_action(GameAction::TogglePause);
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn start_action_is_idempotent_while_running() {
    let mut game = SnakeGame::new(9);
    game.apply_action(GameAction::Start);
    assert_eq!(game.phase(), GamePhase::Running);

    let head = game.head();
    game.apply_action(GameAction::Start);
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.head(), head);
}

#[test]
fn steering_is_ignored_outside_running() {
    let mut game = SnakeGame::new(9);
    game.apply_action(GameAction::Steer(Direction::Down));
    game.start();
    assert!(game.place_food(Point::new(0, 0)));

    // The pre-start steer must not have been queued
    game.tick();
    assert_eq!(game.direction(), Direction::Right);

    game.toggle_pause();
    game.apply_action(GameAction::Steer(Direction::Down));
    game.toggle_pause();
    game.tick();
    assert_eq!(game.direction(), Direction::Right);
}

#[test]
fn reset_action_restores_everything() {
    let mut game = SnakeGame::new(9);
    game.start();
    let head = game.head();
    assert!(game.place_food(Point::new(head.x + 1, head.y)));
    game.tick();
    assert!(game.score() > 0);

    game.apply_action(GameAction::Reset);
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), STARTING_LIVES);
    assert_eq!(game.body().len(), 1);

    // A fresh start works after a reset
    assert!(game.start());
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn game_over_lands_back_on_not_started_ready_for_a_new_game() {
    let mut game = SnakeGame::new(9);
    game.start();
    assert!(game.place_food(Point::new(0, 0)));

    let mut final_score = None;
    while final_score.is_none() {
        if let TickOutcome::GameOver { final_score: s } = game.tick() {
            final_score = Some(s);
        }
    }

    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert!(game.start());
    assert_eq!(game.phase(), GamePhase::Running);
}
