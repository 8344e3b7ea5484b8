// cryptor-core/src/headless.rs
//! `headless.rs`
//! Convenience wrappers for using the recovery engine in headless mode (non-UI).
//!
//! [`try_decode`] turns one stored message into readable text, using the
//! recorded offset when there is one and falling back to key recovery.

use log::{debug, info};
use std::fmt;

use crate::cipher::{decode, ShiftKey};
use crate::engine::RecoveryEngine;
use crate::errors::CryptorError;
use crate::messages::Meta;
use crate::report::{DecryptionResult, RecoveryOptions};

/// Where the key used for a decode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Taken from the message metadata.
    Known,
    /// Recovered statistically.
    Recovered,
}

/// What [`try_decode`] made of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The message was never encoded.
    Plaintext(String),
    Decoded {
        text: String,
        key: ShiftKey,
        source: KeySource,
    },
    /// The metadata names a cipher other than Caesar.
    Unsupported { cipher: String },
    /// No key was recorded and the text carries no letters to recover one from.
    Undecodable,
}

impl DecodeOutcome {
    /// The decoded text, if there is one.
    pub fn text(&self) -> Option<&str> {
        match self {
            DecodeOutcome::Plaintext(text) | DecodeOutcome::Decoded { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Human-readable rendering, as shown in the inbox listing.
    pub fn describe(&self) -> String {
        match self {
            DecodeOutcome::Plaintext(text) | DecodeOutcome::Decoded { text, .. } => text.clone(),
            DecodeOutcome::Unsupported { cipher } => {
                format!("[unsupported cipher '{}'; message left as is]", cipher)
            }
            DecodeOutcome::Undecodable => {
                "[Unable to decode: no key and no letters to recover one from]".to_string()
            }
        }
    }
}

impl fmt::Display for DecodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Decodes one message according to its metadata.
///
/// A recorded integer offset bypasses the engine entirely. Without one,
/// the key is recovered with `engine`; a low-confidence result makes the
/// message undecodable.
pub fn try_decode(
    text: &str,
    meta: &Meta,
    engine: &dyn RecoveryEngine,
) -> Result<DecodeOutcome, CryptorError> {
    if !meta.encoded {
        return Ok(DecodeOutcome::Plaintext(text.to_string()));
    }
    if !meta.is_caesar() {
        debug!("Skipping message with cipher '{}'.", meta.cipher);
        return Ok(DecodeOutcome::Unsupported { cipher: meta.cipher.clone() });
    }

    if let Some(key) = meta.known_key() {
        debug!("Decoding with recorded key {}.", key);
        return Ok(DecodeOutcome::Decoded {
            text: decode(text, key),
            key,
            source: KeySource::Known,
        });
    }

    match engine.recover(text, &RecoveryOptions::default())? {
        DecryptionResult::Best(best) => {
            info!("Recovered key {} ({} certainty).", best.key(), best.certainty);
            Ok(DecodeOutcome::Decoded {
                key: best.key(),
                text: best.plaintext,
                source: KeySource::Recovered,
            })
        }
        _ => Ok(DecodeOutcome::Undecodable),
    }
}
