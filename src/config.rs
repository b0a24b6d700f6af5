use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::{Result, TypingError};
use crate::word_bank::{WordBank, DEFAULT_DELIMITER, DEFAULT_LIST, MAX_WORD_LEN};

pub const DEFAULT_NUMBER_OF_WORDS: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub number_of_words: usize,
    /// Word list on disk; the bundled English list when unset.
    pub word_list: Option<PathBuf>,
    pub delimiter: char,
    pub max_word_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_words: DEFAULT_NUMBER_OF_WORDS,
            word_list: None,
            delimiter: DEFAULT_DELIMITER,
            max_word_len: MAX_WORD_LEN,
        }
    }
}

impl Config {
    pub fn load_word_bank(&self) -> Result<WordBank> {
        match &self.word_list {
            Some(path) => WordBank::from_path(path, self.delimiter, self.max_word_len),
            None => WordBank::bundled(DEFAULT_LIST, self.delimiter, self.max_word_len),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("typingtest_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    fn try_load(&self) -> Result<Option<Config>> {
        let Ok(bytes) = fs::read(&self.path) else {
            return Ok(None);
        };
        serde_json::from_slice::<Config>(&bytes)
            .map(Some)
            .map_err(|source| TypingError::Config {
                path: self.path.clone(),
                source,
            })
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or malformed files fall back to defaults.
    fn load(&self) -> Config {
        match self.try_load() {
            Ok(Some(cfg)) => cfg,
            Ok(None) => Config::default(),
            Err(err) => {
                tracing::warn!("{err}, using defaults");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
