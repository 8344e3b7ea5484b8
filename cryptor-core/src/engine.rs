// cryptor-core/src/engine.rs
//! Defines the core `RecoveryEngine` trait.
//!
//! The trait decouples callers such as [`crate::headless::try_decode`] and
//! the CLI from the concrete scoring strategy, so an engine with a custom
//! policy (or a test double) can be swapped in.
//!
//! License: MIT OR APACHE 2.0

use crate::config::ScorerParams;
use crate::errors::CryptorError;
use crate::report::{DecryptionResult, RecoveryOptions};

/// A strategy for recovering the shift key of a Caesar-shifted text.
pub trait RecoveryEngine: Send + Sync {
    /// Scores every candidate shift of `ciphertext` and reports the winner
    /// (or a ranked list when `options.return_all` is set).
    ///
    /// Text without letters yields [`DecryptionResult::LowConfidence`].
    /// An out-of-range `options.top_n` is rejected before any scoring.
    fn recover(
        &self,
        ciphertext: &str,
        options: &RecoveryOptions,
    ) -> Result<DecryptionResult, CryptorError>;

    /// The fixed-point scoring policy this engine runs with.
    fn params(&self) -> &ScorerParams;
}
