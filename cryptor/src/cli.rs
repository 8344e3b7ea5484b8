// cryptor/src/cli.rs
//! This file defines the command-line interface (CLI) for the cryptor application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cryptor",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Encode, decode and crack Caesar-shifted messages",
    long_about = "Cryptor rotates text by a Caesar shift and recovers unknown shifts statistically. Every candidate key is scored by chi-squared against English letter frequencies; near-ties are settled by a blend of letter, vowel and common-word heuristics.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging, including per-candidate scores.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a scorer configuration file (YAML).
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        env = "CRYPTOR_CONFIG",
        help = "Path to a custom scorer configuration file (YAML)."
    )]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cryptor` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rotates every letter forward by the given shift.
    #[command(about = "Encode text by rotating letters forward by a shift.")]
    Encode(TransformCommand),

    /// Rotates every letter backward by the given shift.
    #[command(about = "Decode text by rotating letters backward by a shift.")]
    Decode(TransformCommand),

    /// Recovers the shift of a ciphertext without knowing it.
    #[command(about = "Recover the shift of a ciphertext and print the plaintext.")]
    Crack(CrackCommand),

    /// Decodes every message in a JSON message store.
    #[command(about = "Decode every message in a JSON message store.")]
    Inbox(InboxCommand),
}

/// Arguments for the `encode` and `decode` commands.
#[derive(Parser, Debug)]
pub struct TransformCommand {
    /// Shift to apply; any integer, reduced modulo 26.
    #[arg(long, short = 's', allow_negative_numbers = true, help = "Shift to apply (any integer, reduced modulo 26).")]
    pub shift: i64,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `crack` command.
#[derive(Parser, Debug)]
pub struct CrackCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Show a ranked table of candidates instead of the single best answer.
    /// Without a value, the configured `default_top_n` is used.
    #[arg(
        long,
        short = 't',
        value_name = "N",
        num_args = 0..=1,
        help = "List the top N candidates (1-26); without N, uses the configured default."
    )]
    pub top: Option<Option<usize>>,

    /// Emit the result as JSON on stdout.
    #[arg(long, help = "Emit the result as JSON.")]
    pub json: bool,
}

/// Arguments for the `inbox` command.
#[derive(Parser, Debug)]
pub struct InboxCommand {
    /// The JSON message store to read.
    #[arg(value_name = "FILE", help = "JSON message store (an object keyed by id, or a list).")]
    pub store: PathBuf,

    /// Emit the decoded messages as JSON on stdout.
    #[arg(long, help = "Emit the decoded messages as JSON.")]
    pub json: bool,
}
