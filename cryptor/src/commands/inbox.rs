//! `inbox`: decode every message in a message store.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

use cryptor_core::{load_messages, try_decode, DecodeOutcome, KeySource, Message, RecoveryEngine};

use crate::cli::InboxCommand;
use crate::commands::{info_msg, success_msg};
use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

/// One decoded message, as printed or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboxEntry {
    pub id: String,
    /// `plaintext`, `recorded_key`, `recovered_key`, `unsupported` or `undecodable`.
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<u8>,
    pub text: String,
}

impl InboxEntry {
    pub fn from_outcome(message: &Message, outcome: &DecodeOutcome) -> Self {
        let (status, key) = match outcome {
            DecodeOutcome::Plaintext(_) => ("plaintext", None),
            DecodeOutcome::Decoded { key, source, .. } => match source {
                KeySource::Known => ("recorded_key", Some(key.value())),
                KeySource::Recovered => ("recovered_key", Some(key.value())),
            },
            DecodeOutcome::Unsupported { .. } => ("unsupported", None),
            DecodeOutcome::Undecodable => ("undecodable", None),
        };
        Self {
            id: message.id.clone(),
            status,
            key,
            text: outcome.describe(),
        }
    }

    pub fn is_readable(&self) -> bool {
        matches!(self.status, "plaintext" | "recorded_key" | "recovered_key")
    }

    fn render(&self, theme: &ThemeMap, enable_colors: bool) -> String {
        let id = paint(&format!("[{}]", self.id), ThemeEntry::Header, theme, enable_colors);
        let key = |k: u8| paint(&k.to_string(), ThemeEntry::Key, theme, enable_colors);
        match (self.status, self.key) {
            ("recorded_key", Some(k)) => format!("{} (key {}) {}", id, key(k), self.text),
            ("recovered_key", Some(k)) => format!("{} (recovered key {}) {}", id, key(k), self.text),
            ("plaintext", _) => format!("{} {}", id, self.text),
            _ => format!("{} {}", id, paint(&self.text, ThemeEntry::Undecoded, theme, enable_colors)),
        }
    }
}

/// Decodes every message with `engine`, in store order.
pub fn decode_messages(engine: &dyn RecoveryEngine, messages: &[Message]) -> Result<Vec<InboxEntry>> {
    messages
        .iter()
        .map(|message| {
            let outcome = try_decode(&message.text, &message.meta, engine)
                .with_context(|| format!("Failed to decode message '{}'", message.id))?;
            Ok(InboxEntry::from_outcome(message, &outcome))
        })
        .collect()
}

pub fn run_inbox(
    engine: &dyn RecoveryEngine,
    cmd: &InboxCommand,
    quiet: bool,
    theme: &ThemeMap,
) -> Result<ExitCode> {
    let messages = load_messages(&cmd.store)?;
    info!("Decoding {} messages from {}.", messages.len(), cmd.store.display());
    let entries = decode_messages(engine, &messages)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if cmd.json {
        let json = serde_json::to_string_pretty(&entries).context("Failed to serialize messages")?;
        writeln!(writer, "{}", json)?;
        return Ok(ExitCode::SUCCESS);
    }

    if entries.is_empty() {
        if !quiet {
            info_msg("No messages to decode.", theme);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let enable_colors = stdout.is_terminal();
    for entry in &entries {
        writeln!(writer, "{}", entry.render(theme, enable_colors))?;
    }

    if !quiet {
        let readable = entries.iter().filter(|e| e.is_readable()).count();
        success_msg(format!("{} of {} messages readable.", readable, entries.len()), theme);
    }
    Ok(ExitCode::SUCCESS)
}
