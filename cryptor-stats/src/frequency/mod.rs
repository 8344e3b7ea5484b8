// cryptor-stats/src/frequency/mod.rs

use crate::ALPHABET_LEN;

/// Expected relative frequency of each letter `A..=Z` in English prose, in millionths.
///
/// The table is a process-wide constant; it is never mutated or reloaded.
pub const ENGLISH_FREQUENCIES: [u32; ALPHABET_LEN] = [
    81_670,  // A
    14_920,  // B
    27_820,  // C
    42_530,  // D
    127_020, // E
    22_280,  // F
    20_150,  // G
    60_940,  // H
    69_660,  // I
    1_530,   // J
    7_720,   // K
    40_250,  // L
    24_060,  // M
    67_490,  // N
    75_070,  // O
    19_290,  // P
    950,     // Q
    59_870,  // R
    63_270,  // S
    90_560,  // T
    27_580,  // U
    9_780,   // V
    23_600,  // W
    1_500,   // X
    19_740,  // Y
    740,     // Z
];

/// The six most frequent letters in English text.
pub const ETAOIN: [u8; 6] = *b"ETAOIN";

/// Letters counted as vowels by the vowel-ratio signal.
pub const VOWELS: [u8; 5] = *b"AEIOU";

/// Maps an ASCII letter (either case) to its alphabet index. Anything else is `None`.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

#[inline]
pub fn is_etaoin(index: usize) -> bool {
    ETAOIN.iter().any(|&l| (l - b'A') as usize == index)
}

#[inline]
pub fn is_vowel(index: usize) -> bool {
    VOWELS.iter().any(|&l| (l - b'A') as usize == index)
}
