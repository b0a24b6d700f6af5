use crossterm::event::KeyEvent;

use crate::input;
use crate::session::Transition;
use crate::thok::Thok;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Typing,
    Results,
}

/// Whether the event loop should keep going after a key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub struct App {
    pub thok: Thok,
    pub state: AppState,
}

impl App {
    pub fn new(prompt: String) -> Self {
        Self {
            thok: Thok::new(prompt),
            state: AppState::Typing,
        }
    }

    /// Start the session clock right before the first frame is drawn.
    pub fn start(&mut self) {
        self.thok.start();
        if self.thok.has_finished() {
            // one-character passages have nothing left to judge
            self.thok.finish_at(std::time::Instant::now());
            self.state = AppState::Results;
        }
    }

    pub fn on_key(&mut self, key: &KeyEvent) -> Flow {
        match self.state {
            AppState::Typing => {
                let Some(event) = input::session_event(key) else {
                    return Flow::Continue;
                };
                match self.thok.apply(event) {
                    Transition::Cancelled => Flow::Exit,
                    Transition::Finished => {
                        self.state = AppState::Results;
                        Flow::Continue
                    }
                    Transition::Continue | Transition::Ignored => Flow::Continue,
                }
            }
            AppState::Results => {
                if input::is_continue(key) {
                    Flow::Exit
                } else {
                    Flow::Continue
                }
            }
        }
    }
}
