// Library surface for headless/integration tests and reuse.
// The binary only wires the terminal to these modules.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod runtime;
pub mod sampler;
pub mod session;
pub mod stats;
pub mod thok;
pub mod ui;
pub mod word_bank;

pub use error::{Result, TypingError};
