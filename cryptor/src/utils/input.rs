//! Reading command input from a file or stdin.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole input, from `path` when given and stdin otherwise.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            debug!("Read {} bytes from stdin.", buffer.len());
            Ok(buffer)
        }
    }
}
