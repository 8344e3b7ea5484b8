// cryptor-core/src/lib.rs
//! # Cryptor Core Library
//!
//! `cryptor-core` provides the platform-independent logic for Caesar-shift
//! transforms and statistical key recovery. It scores every candidate shift
//! by χ² against English letter frequencies, settles near-ties with a blend
//! of language heuristics, and reports either the single winner or a ranked
//! list of candidates.
//!
//! The library is pure and deterministic: all scores are fixed-point
//! millionths, so the same input always yields the same ranking. It has no
//! concerns for terminal output or application state.
//!
//! ## Modules
//!
//! * `cipher`: `ShiftKey` and the encode/decode transforms.
//! * `config`: `ScorerConfig`, the tunable scoring policy, and its YAML loader.
//! * `engine`: Defines the `RecoveryEngine` trait.
//! * `engines`: Concrete implementations of `RecoveryEngine`.
//! * `selector`: Near-best window, blended tie-break and ranking order.
//! * `report`: Score records, evidence and the `DecryptionResult` returned to callers.
//! * `messages`: Loading stored messages and their metadata.
//! * `headless`: One-shot helpers such as `try_decode`.
//! * `errors`: The `CryptorError` type.
//!
//! ## Public API
//!
//! **Key Recovery**
//!
//! * [`recover_key`]: Recovers the key with the built-in policy.
//! * [`FrequencyEngine`]: The χ²-plus-heuristics engine, buildable from a custom [`ScorerConfig`].
//! * [`RecoveryOptions`]: Single-answer or top-N reporting.
//!
//! **Transforms**
//!
//! * [`encode`] / [`decode`]: Rotate letters forward / backward by a [`ShiftKey`].
//!
//! **Messages**
//!
//! * [`load_messages`]: Reads a JSON message store.
//! * [`try_decode`]: Decodes one message from its metadata, recovering the key when needed.
//!
//! ## Usage Example
//!
//! ```rust
//! use cryptor_core::{decode, encode, recover_key, RecoveryOptions, ShiftKey};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let key = ShiftKey::try_from(3u8)?;
//!     let ciphertext = encode("The quick brown fox jumps over the lazy dog", key);
//!     assert_eq!(ciphertext, "Wkh txlfn eurzq ira mxpsv ryhu wkh odcb grj");
//!
//!     let result = recover_key(&ciphertext, RecoveryOptions::default())?;
//!     assert_eq!(result.key(), Some(key));
//!     assert_eq!(decode(&ciphertext, key), result.best().unwrap().plaintext);
//!
//!     // Text without letters yields the low-confidence sentinel, not an error.
//!     assert!(recover_key("12345 !!!", RecoveryOptions::default())?.is_low_confidence());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Scoring APIs return [`CryptorError`]; file-loading APIs return
//! `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod cipher;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod messages;
pub mod report;
pub mod selector;

/// Re-exports the fixed-point score type shared with `cryptor-stats`.
pub use cryptor_stats::{Millionths, SCALE};

/// Re-exports the cipher transforms and key type.
pub use cipher::{decode, encode, shift_text, ShiftKey};

/// Re-exports the scoring policy and its defaults.
pub use config::{ScorerConfig, ScorerParams, MAX_TOP_N};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CryptorError;

/// Re-exports the engine trait and the concrete frequency engine.
pub use engine::RecoveryEngine;
pub use engines::frequency_engine::{recover_key, FrequencyEngine};

/// Re-exports result types.
pub use report::{
    compute_evidence, Certainty, DecryptionResult, RankedCandidate, RecoveryOptions, ScoreRecord,
    Signals,
};

/// Re-exports message loading and one-shot decoding.
pub use headless::{try_decode, DecodeOutcome, KeySource};
pub use messages::{load_messages, parse_messages, Message, Meta};
