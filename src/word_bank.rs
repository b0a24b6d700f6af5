use include_dir::{include_dir, Dir};
use std::fs;
use std::path::Path;

use crate::error::{Result, TypingError};
use crate::input::UNMATCHED;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

pub const DEFAULT_LIST: &str = "english.txt";
pub const DEFAULT_DELIMITER: char = '\n';
pub const MAX_WORD_LEN: usize = 20;

/// Ordered, immutable list of words a passage is sampled from
#[derive(Debug, Clone, PartialEq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Split `source` on `delimiter`, stripping whitespace inside each token.
    ///
    /// The replacement character is stripped as well, so key presses mapped
    /// to it can never match. Empty tokens are dropped and tokens longer than
    /// `max_word_len` characters are skipped.
    pub fn parse(source: &str, delimiter: char, max_word_len: usize) -> Self {
        let mut words = Vec::new();

        for token in source.split(delimiter) {
            let word: String = token
                .chars()
                .filter(|c| !c.is_whitespace() && *c != UNMATCHED)
                .collect();
            if word.is_empty() {
                continue;
            }
            if word.chars().count() > max_word_len {
                tracing::warn!(word = %word, max_word_len, "skipping over-long word");
                continue;
            }
            words.push(word);
        }

        Self { words }
    }

    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: char, max_word_len: usize) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| TypingError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::parse(&source, delimiter, max_word_len);
        tracing::info!(path = %path.display(), words = bank.len(), "loaded word list");
        Ok(bank)
    }

    /// Load one of the lists compiled into the binary.
    pub fn bundled(name: &str, delimiter: char, max_word_len: usize) -> Result<Self> {
        let contents = LANG_DIR
            .get_file(name)
            .and_then(|f| f.contents_utf8())
            .ok_or_else(|| TypingError::MissingBundledList(name.to_string()))?;
        let bank = Self::parse(contents, delimiter, max_word_len);
        tracing::info!(list = name, words = bank.len(), "loaded bundled word list");
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.words.get(idx).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl From<Vec<String>> for WordBank {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_parse_newline_delimited() {
        let bank = WordBank::parse("the\ncat\nsat\n", '\n', MAX_WORD_LEN);
        assert_eq!(bank.words(), &["the", "cat", "sat"]);
    }

    #[test]
    fn test_parse_strips_inner_whitespace() {
        let bank = WordBank::parse("ca t\r\n\tdog \n", '\n', MAX_WORD_LEN);
        assert_eq!(bank.words(), &["cat", "dog"]);
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        let bank = WordBank::parse("\n\none\n  \ntwo", '\n', MAX_WORD_LEN);
        assert_eq!(bank.words(), &["one", "two"]);
    }

    #[test]
    fn test_parse_strips_replacement_char() {
        let bank = WordBank::parse("ca\u{FFFD}t\n\u{FFFD}\n", '\n', MAX_WORD_LEN);
        assert_eq!(bank.words(), &["cat"]);
    }

    #[test]
    fn test_parse_custom_delimiter() {
        let bank = WordBank::parse("red,green,blue", ',', MAX_WORD_LEN);
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.get(1), Some("green"));
    }

    #[test]
    fn test_parse_skips_over_long_words() {
        let bank = WordBank::parse("short\nabcdefghijk\nok", '\n', 10);
        assert_eq!(bank.words(), &["short", "ok"]);
    }

    #[test]
    fn test_max_len_counts_chars_not_bytes() {
        let bank = WordBank::parse("ünïcödé", '\n', 7);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_bundled_english() {
        let bank = WordBank::bundled(DEFAULT_LIST, DEFAULT_DELIMITER, MAX_WORD_LEN).unwrap();
        assert!(bank.len() > 100);
        assert!(bank.words().iter().all(|w| !w.is_empty()));
        assert!(bank.words().iter().all(|w| w.chars().count() <= MAX_WORD_LEN));
    }

    #[test]
    fn test_bundled_missing() {
        let result = WordBank::bundled("klingon.txt", DEFAULT_DELIMITER, MAX_WORD_LEN);
        assert_matches!(result, Err(TypingError::MissingBundledList(name)) if name == "klingon.txt");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta\ngamma").unwrap();

        let bank = WordBank::from_path(file.path(), '\n', MAX_WORD_LEN).unwrap();
        assert_eq!(bank.words(), &["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordBank::from_path(dir.path().join("nope.txt"), '\n', MAX_WORD_LEN);
        assert_matches!(result, Err(TypingError::WordList { .. }));
    }
}
