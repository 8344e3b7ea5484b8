// cryptor-core/src/messages.rs
//! Loading received messages from a JSON store.
//!
//! The store is either an object keyed by message id or a plain list of
//! message objects. Both shapes are normalized into a `Vec<Message>` with an
//! explicit `id`.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;

use crate::cipher::ShiftKey;

/// Metadata stored next to each message.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Meta {
    /// Whether the text is enciphered at all.
    pub encoded: bool,
    /// The shift that turns the stored text back into plaintext, if the
    /// sender recorded one. Kept as raw JSON so that non-integer values
    /// (booleans, strings, floats) can be told apart from a missing offset
    /// without failing the whole load.
    pub offset: Option<Value>,
    /// Cipher name; only "caesar" (any case) is supported.
    pub cipher: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            encoded: false,
            offset: None,
            cipher: "caesar".to_string(),
        }
    }
}

impl Meta {
    /// The cipher key implied by the recorded offset, when it is a JSON
    /// integer. An offset of 3 undoes a key of 23.
    ///
    /// Booleans are rejected even though some encoders treat them as 0/1.
    pub fn known_key(&self) -> Option<ShiftKey> {
        match &self.offset {
            Some(Value::Number(n)) => n.as_i64().map(|offset| ShiftKey::normalized(26 - offset.rem_euclid(26))),
            _ => None,
        }
    }

    pub fn is_caesar(&self) -> bool {
        self.cipher.eq_ignore_ascii_case("caesar")
    }
}

/// One received message.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    #[serde(alias = "message", alias = "body")]
    pub text: String,
    #[serde(default)]
    pub meta: Meta,
}

/// Reads messages from `path`.
///
/// A missing file yields an empty list (with a warning); unreadable or
/// malformed content is an error.
pub fn load_messages<P: AsRef<Path>>(path: P) -> Result<Vec<Message>> {
    let path = path.as_ref();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Message store {} not found; continuing with no messages.", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read message store {}", path.display()))
        }
    };

    let messages = parse_messages(&text)
        .with_context(|| format!("Failed to parse message store {}", path.display()))?;
    info!("Loaded {} messages from {}.", messages.len(), path.display());
    Ok(messages)
}

/// Parses a message store from a JSON string.
pub fn parse_messages(json: &str) -> Result<Vec<Message>> {
    let data: Value = serde_json::from_str(json).context("Invalid JSON")?;

    let entries: Vec<Value> = match data {
        Value::Object(map) => map
            .into_iter()
            .map(|(id, fields)| with_default_id(fields, &id))
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, fields)| with_default_id(fields, &idx.to_string()))
            .collect(),
        other => bail!("Expected an object or a list of messages, found {}", json_kind(&other)),
    };

    debug!("Normalizing {} message entries.", entries.len());
    entries
        .into_iter()
        .map(|entry| {
            let id = entry.get("id").and_then(Value::as_str).unwrap_or_default().to_string();
            serde_json::from_value(entry).with_context(|| format!("Malformed message '{}'", id))
        })
        .collect()
}

/// Fills in `id` when absent and stringifies numeric ids. An explicit id
/// inside the entry wins over the store key.
fn with_default_id(fields: Value, fallback: &str) -> Value {
    let Value::Object(mut map) = fields else {
        return fields;
    };
    let id = match map.remove("id") {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => fallback.to_string(),
    };
    let mut normalized = Map::new();
    normalized.insert("id".to_string(), Value::String(id));
    normalized.extend(map);
    Value::Object(normalized)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
