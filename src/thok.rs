use std::time::Instant;

use crate::session::{Outcome, SessionEvent, SessionState, Transition};
use crate::stats::{compute_result, SessionResult};

/// represents a test being displayed to the user
#[derive(Debug)]
pub struct Thok {
    pub prompt: String,
    expected: Vec<char>,
    pub session_state: SessionState,
}

impl Thok {
    pub fn new(prompt: String) -> Self {
        let expected: Vec<char> = prompt.chars().collect();
        let session_state = SessionState::new(expected.len());
        Self {
            prompt,
            expected,
            session_state,
        }
    }

    /// Start the clock. Idle time before the first keystroke is counted.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.session_state.started_at = Some(now);
    }

    pub fn has_started(&self) -> bool {
        self.session_state.started_at.is_some()
    }

    /// The session ends on the last character position, one before the end
    /// of the text; that final character is never judged.
    pub fn has_finished(&self) -> bool {
        self.session_state.cursor_pos + 1 >= self.expected.len()
    }

    pub fn is_cancelled(&self) -> bool {
        self.session_state.cancelled
    }

    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }

    pub fn get_expected_char(&self, idx: usize) -> Option<char> {
        self.expected.get(idx).copied()
    }

    pub fn cursor_pos(&self) -> usize {
        self.session_state.cursor_pos
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.session_state.outcomes
    }

    pub fn errors(&self) -> usize {
        self.session_state.errors
    }

    pub fn result(&self) -> Option<&SessionResult> {
        self.session_state.result.as_ref()
    }

    pub fn apply(&mut self, event: SessionEvent) -> Transition {
        self.apply_at(event, Instant::now())
    }

    /// Feed one event, using `now` as the clock reading should it end the
    /// session.
    pub fn apply_at(&mut self, event: SessionEvent, now: Instant) -> Transition {
        if self.is_cancelled() || self.session_state.result.is_some() {
            return Transition::Ignored;
        }

        match event {
            SessionEvent::Cancel => {
                self.session_state.cancelled = true;
                tracing::info!(
                    cursor = self.cursor_pos(),
                    errors = self.errors(),
                    "session cancelled"
                );
                return Transition::Cancelled;
            }
            SessionEvent::Backspace => self.backspace(),
            SessionEvent::Char(c) => {
                if self.has_finished() {
                    return Transition::Ignored;
                }
                self.write(c);
            }
        }

        if self.has_finished() {
            self.finish_at(now);
            Transition::Finished
        } else {
            Transition::Continue
        }
    }

    fn write(&mut self, c: char) {
        let idx = self.session_state.cursor_pos;
        let expected = self.expected[idx];

        self.session_state.outcomes[idx] = if c == expected {
            Outcome::Correct
        } else {
            self.session_state.errors += 1;
            Outcome::Incorrect
        };
        self.session_state.cursor_pos += 1;
    }

    /// Step back one character. The error counter keeps any mistake made at
    /// the erased position.
    fn backspace(&mut self) {
        if self.session_state.cursor_pos > 0 {
            self.session_state.cursor_pos -= 1;
            let idx = self.session_state.cursor_pos;
            self.session_state.outcomes[idx] = Outcome::Untested;
        }
    }

    /// Stop the clock and compute the result. Only the first call has effect.
    pub fn finish_at(&mut self, now: Instant) -> SessionResult {
        if let Some(result) = self.session_state.result {
            return result;
        }

        let started_at = *self.session_state.started_at.get_or_insert(now);
        let elapsed_secs = now.saturating_duration_since(started_at).as_secs_f64();

        let result = compute_result(&self.prompt, self.session_state.errors, elapsed_secs);
        tracing::info!(
            elapsed_secs = result.elapsed_secs,
            wpm = result.wpm,
            adjusted_wpm = result.adjusted_wpm,
            accuracy = result.accuracy,
            errors = self.session_state.errors,
            "session finished"
        );
        self.session_state.result = Some(result);
        result
    }
}
