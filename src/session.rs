use std::time::Instant;

use crate::stats::SessionResult;

/// One input event fed to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Cancel,
    Backspace,
    Char(char),
}

/// What a session did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Finished,
    Cancelled,
    /// The session had already ended; the event was dropped.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Untested,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub started_at: Option<Instant>,
    pub cancelled: bool,
    // Typing state
    pub cursor_pos: usize,
    pub outcomes: Vec<Outcome>,
    pub errors: usize,
    // Results
    pub result: Option<SessionResult>,
}

impl SessionState {
    pub fn new(len: usize) -> Self {
        Self {
            started_at: None,
            cancelled: false,
            cursor_pos: 0,
            outcomes: vec![Outcome::Untested; len],
            errors: 0,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_untested() {
        let state = SessionState::new(4);

        assert_eq!(state.cursor_pos, 0);
        assert_eq!(state.errors, 0);
        assert_eq!(state.outcomes, vec![Outcome::Untested; 4]);
        assert!(state.started_at.is_none());
        assert!(state.result.is_none());
        assert!(!state.cancelled);
    }
}
