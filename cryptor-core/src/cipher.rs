// cryptor-core/src/cipher.rs
//! The Caesar rotation itself: shift keys and text transforms.
//!
//! Only ASCII letters rotate; their case is preserved. Everything else
//! (digits, punctuation, whitespace, non-ASCII) passes through untouched.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CryptorError;

/// The alphabet a shift rotates over.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A hypothesized Caesar shift in `0..=25`.
///
/// Key `k` means the ciphertext was produced by rotating each letter
/// forward by `k`, so [`decode`] with the same key restores the plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ShiftKey(u8);

impl ShiftKey {
    pub const MAX: u8 = 25;
    pub const COUNT: usize = 26;

    /// Checked constructor; `None` outside `0..=25`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Reduces any integer offset (negative or larger than 25) modulo 26.
    pub fn normalized(offset: i64) -> Self {
        Self(offset.rem_euclid(Self::COUNT as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All 26 keys in ascending order.
    pub fn all() -> impl Iterator<Item = ShiftKey> {
        (0..=Self::MAX).map(ShiftKey)
    }
}

impl TryFrom<u8> for ShiftKey {
    type Error = CryptorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ShiftKey::new(value).ok_or(CryptorError::InvalidKey(value))
    }
}

impl From<ShiftKey> for u8 {
    fn from(key: ShiftKey) -> u8 {
        key.0
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotates a single ASCII letter forward by `offset` (any integer), preserving case.
pub fn shift_char(c: char, offset: i64) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let step = offset.rem_euclid(ShiftKey::COUNT as i64) as u8;
    let idx = (c as u8 - base + step) % ShiftKey::COUNT as u8;
    (base + idx) as char
}

/// Rotates every letter of `text` forward by `offset`.
pub fn shift_text(text: &str, offset: i64) -> String {
    text.chars().map(|c| shift_char(c, offset)).collect()
}

/// Enciphers `text` by rotating letters forward by `key`.
pub fn encode(text: &str, key: ShiftKey) -> String {
    shift_text(text, key.value() as i64)
}

/// Deciphers `text` by rotating letters backward by `key`.
pub fn decode(text: &str, key: ShiftKey) -> String {
    shift_text(text, -(key.value() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(v: u8) -> ShiftKey {
        ShiftKey::new(v).unwrap()
    }

    #[test]
    fn test_basic_decode() {
        assert_eq!(decode("khoor", key(3)), "hello");
        assert_eq!(decode("Wkh txlfn eurzq ira", key(3)), "The quick brown fox");
    }

    #[test]
    fn test_basic_encode_preserves_case_and_punctuation() {
        assert_eq!(encode("Hello, well!", key(3)), "Khoor, zhoo!");
        assert_eq!(encode("", key(7)), "");
    }

    #[test]
    fn test_wrap_edges_mixed_case() {
        assert_eq!(encode("ZzAa", key(1)), "AaBb");
        assert_eq!(decode("ZzAa", key(1)), "YyZz");
        assert_eq!(shift_char('Z', 2), 'B');
        assert_eq!(shift_char('z', 2), 'b');
        assert_eq!(shift_char('!', 5), '!');
    }

    #[test]
    fn test_large_and_negative_offsets_normalize() {
        assert_eq!(ShiftKey::normalized(29), key(3));
        assert_eq!(ShiftKey::normalized(-23), key(3));
        assert_eq!(shift_text("hello", 29), shift_text("hello", 3));
        assert_eq!(shift_text("hello", -23), shift_text("hello", 3));
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(encode("café", key(1)), "dbgé");
    }

    #[test]
    fn test_round_trip_for_every_key() {
        let plain = "Meet at Dawn, bring 3 torches! Zebra-crossing @ 10:45.";
        for k in ShiftKey::all() {
            let cipher = encode(plain, k);
            assert_eq!(decode(&cipher, k), plain, "key {}", k);
            assert_eq!(encode(&decode(&cipher, k), k), cipher, "key {}", k);
        }
    }

    #[test]
    fn test_key_bounds() {
        assert!(ShiftKey::new(25).is_some());
        assert!(ShiftKey::new(26).is_none());
        assert!(ShiftKey::try_from(30u8).is_err());
        assert_eq!(ShiftKey::all().count(), 26);
    }
}
