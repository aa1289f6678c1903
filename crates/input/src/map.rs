//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Figure controls sit on the arrows (and vi keys); the shooter uses a/d to
/// move and s to fire.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Figure movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),

        // Shooter
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::ShooterLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::ShooterRight),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Shoot),

        // Game flow
        KeyCode::Char('c') | KeyCode::Char('C') => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                None
            } else {
                Some(GameAction::Hold)
            }
        }
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Esc | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn action(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_figure_keys() {
        assert_eq!(action(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Down), Some(GameAction::SoftDrop));
        assert_eq!(action(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(action(KeyCode::Char(' ')), Some(GameAction::HardDrop));

        assert_eq!(action(KeyCode::Char('H')), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Char('l')), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Char('j')), Some(GameAction::SoftDrop));
        assert_eq!(action(KeyCode::Char('k')), Some(GameAction::Rotate));
    }

    #[test]
    fn test_shooter_keys() {
        assert_eq!(action(KeyCode::Char('a')), Some(GameAction::ShooterLeft));
        assert_eq!(action(KeyCode::Char('D')), Some(GameAction::ShooterRight));
        assert_eq!(action(KeyCode::Char('s')), Some(GameAction::Shoot));
    }

    #[test]
    fn test_flow_keys() {
        assert_eq!(action(KeyCode::Char('c')), Some(GameAction::Hold));
        assert_eq!(action(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(action(KeyCode::Esc), Some(GameAction::Reset));
        assert_eq!(action(KeyCode::Char('r')), Some(GameAction::Reset));
        assert_eq!(action(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_ctrl_c_is_not_hold() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), None);
        assert!(should_quit(key));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
    }
}
