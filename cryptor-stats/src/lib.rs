// cryptor-stats/src/lib.rs
//! Letter-frequency statistics for Caesar-shift key recovery.
//!
//! Everything that feeds a comparison is kept in fixed-point millionths so
//! that two runs over the same ciphertext always rank candidates the same
//! way, whatever the platform.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod fixed;
pub mod frequency;
pub mod observation;
pub mod chi_squared;
pub mod keywords;
pub mod heuristics;

/// A fixed-point quantity where `1_000_000` represents `1.0`.
pub type Millionths = u64;

/// Fixed-point scale shared by every score in this crate.
pub const SCALE: Millionths = 1_000_000;

/// Number of letters (and therefore candidate shifts) in the alphabet.
pub const ALPHABET_LEN: usize = 26;
