//! Command implementations for the cryptor CLI.

pub mod crack;
pub mod inbox;
pub mod transform;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use cryptor_core::{FrequencyEngine, ScorerConfig};

use crate::cli::{Cli, Commands};
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Exit status when the input carries no letters to recover a key from.
pub const EXIT_LOW_CONFIDENCE: u8 = 2;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Builds the recovery engine from `--config`, or from the built-in policy.
pub fn build_engine(config_path: Option<&Path>) -> Result<FrequencyEngine> {
    let config = match config_path {
        Some(path) => ScorerConfig::load_from_file(path)?,
        None => ScorerConfig::load_default()?,
    };
    debug!("Scorer config: {:?}", config);
    FrequencyEngine::new(config).context("Failed to initialize the recovery engine")
}

/// Runs the parsed command line and returns the process exit status.
pub fn dispatch(cli: Cli, theme: &ThemeMap) -> Result<ExitCode> {
    match cli.command {
        Commands::Encode(cmd) => {
            transform::run_transform(&cmd, transform::Direction::Encode, cli.quiet, theme)
        }
        Commands::Decode(cmd) => {
            transform::run_transform(&cmd, transform::Direction::Decode, cli.quiet, theme)
        }
        Commands::Crack(cmd) => {
            let engine = build_engine(cli.config.as_deref())?;
            crack::run_crack(&engine, &cmd, cli.quiet, theme)
        }
        Commands::Inbox(cmd) => {
            let engine = build_engine(cli.config.as_deref())?;
            inbox::run_inbox(&engine, &cmd, cli.quiet, theme)
        }
    }
}
