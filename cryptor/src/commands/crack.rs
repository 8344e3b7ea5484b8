//! `crack`: recover an unknown shift.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

use cryptor_core::{Certainty, DecryptionResult, RankedCandidate, RecoveryEngine, RecoveryOptions};

use crate::cli::CrackCommand;
use crate::commands::{info_msg, warn_msg, EXIT_LOW_CONFIDENCE};
use crate::ui::candidate_table::{candidate_table, fixed};
use crate::ui::theme::{paint, ThemeEntry, ThemeMap};
use crate::utils::input::read_input;

/// Maps `--top [N]` to recovery options. A bare `--top` uses `default_top_n`.
pub fn options_for(top: Option<Option<usize>>, default_top_n: usize) -> RecoveryOptions {
    match top {
        None => RecoveryOptions::default(),
        Some(n) => RecoveryOptions::ranked(n.unwrap_or(default_top_n)),
    }
}

/// One-line summary of the winning candidate.
pub fn summary_line(best: &RankedCandidate, theme: &ThemeMap, enable_colors: bool) -> String {
    let certainty_entry = match best.certainty {
        Certainty::High => ThemeEntry::CertaintyHigh,
        Certainty::Moderate => ThemeEntry::CertaintyModerate,
        Certainty::Low => ThemeEntry::CertaintyLow,
    };
    format!(
        "Recovered key {} (chi2 {}, evidence {}, certainty {})",
        paint(&best.key().to_string(), ThemeEntry::Key, theme, enable_colors),
        fixed(best.record.chi_squared, 3),
        fixed(best.evidence, 3),
        paint(&best.certainty.to_string(), certainty_entry, theme, enable_colors),
    )
}

pub fn run_crack(
    engine: &dyn RecoveryEngine,
    cmd: &CrackCommand,
    quiet: bool,
    theme: &ThemeMap,
) -> Result<ExitCode> {
    let input = read_input(cmd.input_file.as_deref())?;
    let options = options_for(cmd.top, engine.params().default_top_n);
    info!("Starting crack operation ({} bytes, {:?}).", input.len(), options);

    let result = engine.recover(&input, &options).context("Key recovery failed")?;
    let exit = if result.is_low_confidence() {
        ExitCode::from(EXIT_LOW_CONFIDENCE)
    } else {
        ExitCode::SUCCESS
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if cmd.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        writeln!(writer, "{}", json)?;
        return Ok(exit);
    }

    match &result {
        DecryptionResult::LowConfidence => {
            warn_msg("Input contains no letters; no key can be recovered.", theme);
        }
        DecryptionResult::Best(best) => {
            writeln!(writer, "{}", best.plaintext.trim_end_matches(['\r', '\n']))?;
            if !quiet {
                info_msg(summary_line(best, theme, io::stderr().is_terminal()), theme);
            }
        }
        DecryptionResult::Ranked { candidates } => {
            writeln!(writer, "{}", candidate_table(candidates))?;
            if !quiet {
                info_msg(
                    format!("Showing {} of 26 keys; * marks the near-best window.", candidates.len()),
                    theme,
                );
            }
        }
    }

    info!("Crack operation completed.");
    Ok(exit)
}
