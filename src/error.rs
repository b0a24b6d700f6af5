use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypingError {
    /// The passage needs strictly fewer words than the bank holds.
    #[error("word bank has {available} words, need more than {requested}")]
    WordBankTooSmall { requested: usize, available: usize },

    #[error("failed to read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bundled word list {0} not found")]
    MissingBundledList(String),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TypingError>;
