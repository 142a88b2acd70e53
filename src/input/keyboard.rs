//! Keyboard input - maps key events to game actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, GameAction};

/// Map keyboard input to game actions.
///
/// Arrow keys and WASD steer, space toggles pause, enter starts a new game,
/// `r` hard-resets. Unrecognized keys are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Steering
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Steer(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Steer(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Steer(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Steer(Direction::Right))
        }

        // Lifecycle
        KeyCode::Char(' ') => Some(GameAction::TogglePause),
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_steer() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Steer(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Steer(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Steer(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Steer(Direction::Right))
        );
    }

    #[test]
    fn wasd_steers_in_both_cases() {
        for (ch, dir) in [
            ('w', Direction::Up),
            ('a', Direction::Left),
            ('s', Direction::Down),
            ('d', Direction::Right),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(ch))),
                Some(GameAction::Steer(dir))
            );
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(ch.to_ascii_uppercase()))),
                Some(GameAction::Steer(dir))
            );
        }
    }

    #[test]
    fn lifecycle_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Reset)
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
