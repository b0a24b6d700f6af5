/// Words-per-minute assumes this many characters per word.
pub const CHARS_PER_WORD: f64 = 4.0;

/// Figures reported once a session has finished
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResult {
    pub elapsed_secs: f64,
    /// `f64::INFINITY` when no time has elapsed
    pub wpm: f64,
    /// `f64::INFINITY` when no time has elapsed
    pub adjusted_wpm: f64,
    /// Truncated percentage; below zero when errors outnumber characters
    pub accuracy: i64,
}

/// Number of space separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.matches(' ').count() + 1
}

/// Compute the result of a finished session.
///
/// `errors` is the running error counter, which keeps counting mistakes that
/// were later backspaced over.
pub fn compute_result(text: &str, errors: usize, elapsed_secs: f64) -> SessionResult {
    let len = text.chars().count();

    let (wpm, adjusted_wpm) = if elapsed_secs > 0.0 {
        (
            60.0 * word_count(text) as f64 / elapsed_secs,
            60.0 * (len as f64 / CHARS_PER_WORD) / elapsed_secs,
        )
    } else {
        (f64::INFINITY, f64::INFINITY)
    };

    let accuracy = if len == 0 {
        100
    } else {
        (100.0 * (len as f64 - errors as f64) / len as f64) as i64
    };

    SessionResult {
        elapsed_secs,
        wpm,
        adjusted_wpm,
        accuracy,
    }
}
