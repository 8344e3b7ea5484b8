// cryptor/src/logger.rs
//! Logger setup for the cryptor binary.
//!
//! Logs go to stderr so that stdout carries only command output.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes `env_logger`.
///
/// `level` overrides `RUST_LOG` when set; otherwise `RUST_LOG` is honored
/// and defaults to `warn`. Calling this twice is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}

/// Maps the global CLI flags to a level override. `--quiet` wins over `--debug`.
pub fn level_for(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
