//! Table rendering for ranked key candidates.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cryptor_core::{Certainty, Millionths, RankedCandidate, SCALE};

const PREVIEW_CHARS: usize = 40;

/// Formats a millionths value as a decimal with `places` digits.
pub fn fixed(value: Millionths, places: usize) -> String {
    format!("{:.*}", places, value as f64 / SCALE as f64)
}

/// First line of `text`, cut to a readable width.
pub fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > PREVIEW_CHARS {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}

fn certainty_cell(certainty: Certainty) -> Cell {
    let color = match certainty {
        Certainty::High => Color::Green,
        Certainty::Moderate => Color::Yellow,
        Certainty::Low => Color::Red,
    };
    Cell::new(certainty.to_string()).fg(color)
}

fn signal_cell(value: Option<Millionths>) -> Cell {
    Cell::new(value.map(|v| fixed(v, 3)).unwrap_or_else(|| "-".to_string()))
}

/// Builds the ranked table. Keys inside the near-best window carry a `*`.
pub fn candidate_table(candidates: &[RankedCandidate]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Chi2").fg(Color::Cyan),
        Cell::new("ETAOIN"),
        Cell::new("Vowel"),
        Cell::new("Keyword"),
        Cell::new("Blend").add_attribute(Attribute::Bold),
        Cell::new("Evidence"),
        Cell::new("Certainty"),
        Cell::new("Plaintext"),
    ]);

    for candidate in candidates {
        let record = &candidate.record;
        let signals = record.signals;
        let marker = if record.near_best { "*" } else { "" };

        table.add_row(vec![
            Cell::new(candidate.rank),
            Cell::new(format!("{}{}", candidate.key(), marker)).add_attribute(Attribute::Bold),
            Cell::new(fixed(record.chi_squared, 3)).fg(Color::Cyan),
            signal_cell(signals.map(|s| s.etaoin)),
            signal_cell(signals.map(|s| s.vowel)),
            signal_cell(signals.map(|s| s.keyword)),
            signal_cell(signals.map(|s| s.blended)),
            Cell::new(fixed(candidate.evidence, 3)),
            certainty_cell(candidate.certainty),
            Cell::new(preview(&candidate.plaintext)),
        ]);
    }

    for i in 0..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}
