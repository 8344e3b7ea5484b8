// cryptor/src/main.rs
//! Cryptor entry point.
//!
//! Parses the command line, initializes logging and runs the chosen command.
//! Exit status: 0 on success, 1 on error, 2 when the input has no letters to
//! recover a key from.

use clap::Parser;
use log::info;
use std::process::ExitCode;

use cryptor::cli::Cli;
use cryptor::commands::{dispatch, error_msg};
use cryptor::logger;
use cryptor::ui::theme::ThemeStyle;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_for(cli.quiet, cli.debug));
    info!("cryptor started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = ThemeStyle::default_theme_map();
    match dispatch(cli, &theme_map) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}
