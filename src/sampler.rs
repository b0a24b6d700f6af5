//! Passage sampling.
//!
//! Words are drawn with replacement, uniformly over the bank, using
//! rejection sampling on raw `u32` draws so that bank sizes which do not
//! divide 2^32 carry no modulo bias.

use rand::RngCore;

use crate::error::{Result, TypingError};
use crate::word_bank::WordBank;

/// Number of distinct values a raw `u32` draw can take.
const RAW_RANGE: u64 = 1 << 32;

/// Draw an index uniformly from `[0, n)`.
///
/// Raw draws at or above the largest multiple of `n` that fits in the
/// generator's range are discarded. Fewer than two draws are needed on
/// average.
pub fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> usize {
    assert!(n > 0, "cannot draw from an empty range");
    let n = n as u64;
    assert!(n <= RAW_RANGE, "range exceeds the generator's output");

    let limit = (RAW_RANGE / n) * n;
    loop {
        let raw = rng.next_u32() as u64;
        if raw < limit {
            return (raw % n) as usize;
        }
    }
}

/// Build a passage of `count` words separated by single spaces.
///
/// Fails before touching `rng` when the bank does not hold more than
/// `count` words.
pub fn sample<R: RngCore + ?Sized>(bank: &WordBank, count: usize, rng: &mut R) -> Result<String> {
    if count >= bank.len() {
        return Err(TypingError::WordBankTooSmall {
            requested: count,
            available: bank.len(),
        });
    }

    let words = bank.words();
    let mut text = String::new();
    for i in 0..count {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(&words[uniform_index(rng, words.len())]);
    }

    tracing::debug!(count, chars = text.chars().count(), "sampled passage");
    Ok(text)
}
