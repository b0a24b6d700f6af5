//! Key mapping from terminal events to session events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::SessionEvent;

/// Stands in for key presses that have no plain character. Never equal to
/// a character of the passage, so it is always judged wrong.
pub const UNMATCHED: char = '\u{FFFD}';

/// Map a key press to a session event.
///
/// Enter and Tab become their control characters. Control/Alt chords and
/// keys without a character value become [`UNMATCHED`]; every one of them
/// is a wrong keystroke.
pub fn session_event(key: &KeyEvent) -> Option<SessionEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let chord = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

    let event = match key.code {
        KeyCode::Esc => SessionEvent::Cancel,
        _ if is_interrupt(key) => SessionEvent::Cancel,
        KeyCode::Backspace => SessionEvent::Backspace,
        _ if chord => SessionEvent::Char(UNMATCHED),
        KeyCode::Enter => SessionEvent::Char('\n'),
        KeyCode::Tab => SessionEvent::Char('\t'),
        KeyCode::Char(c) => SessionEvent::Char(c),
        _ => SessionEvent::Char(UNMATCHED),
    };
    Some(event)
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Esc leaves the result screen; Ctrl+C does too since raw mode swallows SIGINT.
pub fn is_continue(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press && (key.code == KeyCode::Esc || is_interrupt(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn test_cancel_keys() {
        assert_eq!(
            session_event(&KeyEvent::from(KeyCode::Esc)),
            Some(SessionEvent::Cancel)
        );
        assert_eq!(
            session_event(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(SessionEvent::Cancel)
        );
    }

    #[test]
    fn test_backspace_key() {
        assert_eq!(
            session_event(&KeyEvent::from(KeyCode::Backspace)),
            Some(SessionEvent::Backspace)
        );
    }

    #[test]
    fn test_char_keys() {
        assert_eq!(
            session_event(&KeyEvent::from(KeyCode::Char('a'))),
            Some(SessionEvent::Char('a'))
        );
        assert_eq!(
            session_event(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(SessionEvent::Char('A'))
        );
        assert_eq!(
            session_event(&KeyEvent::from(KeyCode::Char(' '))),
            Some(SessionEvent::Char(' '))
        );
        assert_eq!(
            session_event(&KeyEvent::from(KeyCode::Char('c'))),
            Some(SessionEvent::Char('c'))
        );
    }

    #[test]
    fn test_enter_and_tab_are_chars() {
        assert_eq!(
            session_event(&KeyEvent::from(KeyCode::Enter)),
            Some(SessionEvent::Char('\n'))
        );
        assert_eq!(
            session_event(&KeyEvent::from(KeyCode::Tab)),
            Some(SessionEvent::Char('\t'))
        );
    }

    #[test]
    fn test_non_char_keys_never_match() {
        for code in [
            KeyCode::Left,
            KeyCode::Up,
            KeyCode::F(5),
            KeyCode::Home,
            KeyCode::Delete,
        ] {
            assert_eq!(
                session_event(&KeyEvent::from(code)),
                Some(SessionEvent::Char(UNMATCHED))
            );
        }
    }

    #[test]
    fn test_chords_never_match() {
        assert_eq!(
            session_event(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(SessionEvent::Char(UNMATCHED))
        );
        assert_eq!(
            session_event(&KeyEvent::new(KeyCode::Char('h'), KeyModifiers::ALT)),
            Some(SessionEvent::Char(UNMATCHED))
        );
        assert_eq!(
            session_event(&KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)),
            Some(SessionEvent::Char(UNMATCHED))
        );
    }

    #[test]
    fn test_modified_backspace_still_erases() {
        assert_eq!(
            session_event(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL)),
            Some(SessionEvent::Backspace)
        );
    }

    #[test]
    fn test_release_events_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(session_event(&release), None);
        assert!(!is_continue(&KeyEvent {
            code: KeyCode::Esc,
            ..release
        }));
    }

    #[test]
    fn test_is_continue() {
        assert!(is_continue(&KeyEvent::from(KeyCode::Esc)));
        assert!(!is_continue(&KeyEvent::from(KeyCode::Enter)));
        assert!(!is_continue(&KeyEvent::from(KeyCode::Char('q'))));
        assert!(!is_continue(&KeyEvent::from(KeyCode::Char('c'))));
        assert!(is_continue(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }
}
