// cryptor-stats/src/observation/mod.rs
//! Observed letter counts for a ciphertext under a hypothesized shift.

extern crate alloc;
use alloc::vec::Vec;

use crate::fixed::ratio_millionths;
use crate::frequency::{is_etaoin, is_vowel, letter_index};
use crate::{Millionths, ALPHABET_LEN};

/// Case-folded letter counts of a text. Always holds at least one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    counts: [u64; ALPHABET_LEN],
    total: u64,
}

impl Observation {
    /// Counts the ASCII letters of `text`, ignoring case and skipping everything else.
    ///
    /// Returns `None` when the text holds no letters at all: there is no
    /// frequency table to speak of, and callers must not score it.
    pub fn scan(text: &str) -> Option<Self> {
        let mut counts = [0u64; ALPHABET_LEN];
        for idx in text.chars().filter_map(letter_index) {
            counts[idx] += 1;
        }
        Self::from_counts(counts)
    }

    /// Builds an observation from raw counts. `None` when every count is zero.
    pub fn from_counts(counts: [u64; ALPHABET_LEN]) -> Option<Self> {
        let total: u64 = counts.iter().sum();
        if total == 0 {
            return None;
        }
        Some(Self { counts, total })
    }

    /// The counts the text would have after rotating every letter backward by `key`.
    ///
    /// Plaintext letter `p` came from ciphertext letter `p + key`, so the
    /// count array is rotated rather than the text re-scanned.
    pub fn shifted_back(&self, key: u8) -> Self {
        let key = key as usize % ALPHABET_LEN;
        let mut counts = [0u64; ALPHABET_LEN];
        for (plain, slot) in counts.iter_mut().enumerate() {
            *slot = self.counts[(plain + key) % ALPHABET_LEN];
        }
        Self { counts, total: self.total }
    }

    pub fn counts(&self) -> &[u64; ALPHABET_LEN] {
        &self.counts
    }

    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// Number of alphabetic characters observed.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Relative frequency of one letter, in millionths (truncated).
    pub fn frequency(&self, index: usize) -> Millionths {
        ratio_millionths(self.counts[index], self.total)
    }

    pub fn etaoin_count(&self) -> u64 {
        self.sum_where(is_etaoin)
    }

    pub fn vowel_count(&self) -> u64 {
        self.sum_where(is_vowel)
    }

    fn sum_where(&self, pred: fn(usize) -> bool) -> u64 {
        self.counts
            .iter()
            .enumerate()
            .filter(|(idx, _)| pred(*idx))
            .map(|(_, &c)| c)
            .sum()
    }
}

/// Observation for `ciphertext` shifted back by `key`, or `None` if it has no letters.
pub fn observe(ciphertext: &str, key: u8) -> Option<Observation> {
    Observation::scan(ciphertext).map(|o| o.shifted_back(key))
}

/// Rotates every ASCII letter of `text` backward by `key` and lowercases the result.
///
/// Non-letters are copied byte for byte. Used to feed the keyword scanner.
pub fn unshift_lowercase(text: &str, key: u8) -> Vec<u8> {
    let key = key % ALPHABET_LEN as u8;
    text.bytes()
        .map(|b| {
            if b.is_ascii_alphabetic() {
                let idx = b.to_ascii_lowercase() - b'a';
                b'a' + (idx + ALPHABET_LEN as u8 - key) % ALPHABET_LEN as u8
            } else {
                b
            }
        })
        .collect()
}
