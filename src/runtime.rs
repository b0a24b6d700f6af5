use std::sync::mpsc::{self, Receiver, RecvError};

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum ThokEvent {
    Key(KeyEvent),
    Resize,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait ThokEventSource: Send + 'static {
    /// Block until the next event arrives. Errors once the source has shut down.
    fn recv(&self) -> Result<ThokEvent, RecvError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<ThokEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) => ThokEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => ThokEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!("terminal event read failed: {err}");
                    break;
                }
            };

            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ThokEventSource for CrosstermEventSource {
    fn recv(&self) -> Result<ThokEvent, RecvError> {
        self.rx.recv()
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<ThokEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<ThokEvent>) -> Self {
        Self { rx }
    }
}

impl ThokEventSource for TestEventSource {
    fn recv(&self) -> Result<ThokEvent, RecvError> {
        self.rx.recv()
    }
}

/// Runner that hands the application one event at a time
pub struct Runner<E: ThokEventSource> {
    event_source: E,
}

impl<E: ThokEventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self { event_source }
    }

    /// Blocks for the next event; `None` once the source is gone.
    pub fn step(&self) -> Option<ThokEvent> {
        self.event_source.recv().ok()
    }
}
