//! errors.rs - Custom error types for the cryptor-core library.
//!
//! Key recovery is pure computation over already-loaded text, so the
//! taxonomy is narrow: caller contract violations and bad configuration.
//! Text without letters is not an error; it yields the low-confidence
//! result instead.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types in the `cryptor-core` library.
///
/// `#[non_exhaustive]` so new variants are not a breaking change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CryptorError {
    #[error("top_n must be between 1 and {max}, got {requested}")]
    InvalidTopN { requested: usize, max: usize },

    #[error("Shift key {0} is outside the range 0..=25")]
    InvalidKey(u8),

    #[error("Invalid scorer configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build keyword automaton: {0}")]
    KeywordAutomaton(String),
}
