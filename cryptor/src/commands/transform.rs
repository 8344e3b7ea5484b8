//! `encode` and `decode`: apply a known shift.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

use cryptor_core::{decode, encode, ShiftKey};

use crate::cli::TransformCommand;
use crate::commands::info_msg;
use crate::ui::theme::ThemeMap;
use crate::utils::input::read_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Applies `shift` (reduced modulo 26) in the given direction.
pub fn transform_text(text: &str, shift: i64, direction: Direction) -> String {
    let key = ShiftKey::normalized(shift);
    match direction {
        Direction::Encode => encode(text, key),
        Direction::Decode => decode(text, key),
    }
}

pub fn run_transform(
    cmd: &TransformCommand,
    direction: Direction,
    quiet: bool,
    theme: &ThemeMap,
) -> Result<ExitCode> {
    let input = read_input(cmd.input_file.as_deref())?;
    let output = transform_text(&input, cmd.shift, direction);
    info!("{:?} with key {} over {} bytes.", direction, ShiftKey::normalized(cmd.shift), input.len());

    // Output keeps the input's line endings byte for byte.
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", output).context("Failed to write to stdout")?;
    stdout.flush()?;

    if !quiet && cmd.shift.rem_euclid(26) != cmd.shift {
        info_msg(format!("Shift {} reduced to {}.", cmd.shift, ShiftKey::normalized(cmd.shift)), theme);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_is_identity() {
        let text = "Attack at dawn!\nRegroup at 0600.";
        for shift in [-27, -1, 0, 3, 25, 52, 1_000] {
            let cipher = transform_text(text, shift, Direction::Encode);
            assert_eq!(transform_text(&cipher, shift, Direction::Decode), text);
        }
    }

    #[test]
    fn negative_shift_encodes_backward() {
        assert_eq!(transform_text("abc", -1, Direction::Encode), "zab");
        assert_eq!(transform_text("Hello", 3, Direction::Encode), "Khoor");
    }
}
