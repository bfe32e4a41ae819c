//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Space starts a game from the title or game-over screen and pauses or
/// resumes otherwise. Release events are ignored.
pub fn handle_key_event(key: KeyEvent, phase: Phase) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::MoveDown),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(GameAction::Rotate),

        // Session
        KeyCode::Char(' ') => match phase {
            Phase::Idle | Phase::GameOver => Some(GameAction::Start),
            Phase::Playing | Phase::Paused => Some(GameAction::TogglePause),
        },
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Start),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_movement_keys() {
        let p = Phase::Playing;
        assert_eq!(handle_key_event(key(KeyCode::Left), p), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Right), p), Some(GameAction::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Down), p), Some(GameAction::MoveDown));

        assert_eq!(handle_key_event(key(KeyCode::Char('H')), p), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Char('d')), p), Some(GameAction::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Char('J')), p), Some(GameAction::MoveDown));
    }

    #[test]
    fn test_rotation_keys() {
        for code in [KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('W'), KeyCode::Char('x')] {
            assert_eq!(
                handle_key_event(key(code), Phase::Playing),
                Some(GameAction::Rotate),
                "{:?}",
                code
            );
        }
    }

    #[test]
    fn test_space_depends_on_phase() {
        let space = key(KeyCode::Char(' '));
        assert_eq!(handle_key_event(space, Phase::Idle), Some(GameAction::Start));
        assert_eq!(handle_key_event(space, Phase::GameOver), Some(GameAction::Start));
        assert_eq!(handle_key_event(space, Phase::Playing), Some(GameAction::TogglePause));
        assert_eq!(handle_key_event(space, Phase::Paused), Some(GameAction::TogglePause));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('p')), Phase::Playing),
            Some(GameAction::TogglePause)
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), Phase::Idle), Some(GameAction::Start));
        assert_eq!(
            handle_key_event(key(KeyCode::Char('r')), Phase::GameOver),
            Some(GameAction::Start)
        );
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('z')), Phase::Playing), None);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, Phase::Playing), None);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handle_key_event(release, Phase::Playing), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(!should_quit(key(KeyCode::Char('x'))));
    }
}
