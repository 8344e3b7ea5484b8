// cryptor-core/src/selector.rs
//! Near-best window, blended tie-break and the candidate ranking.
//!
//! Both reporting modes read from the same ranking: the single-answer mode
//! is simply its first entry.

use std::cmp::Ordering;

use cryptor_stats::heuristics::{BlendWeights, HeuristicScores};
use cryptor_stats::{Millionths, SCALE};

use crate::cipher::ShiftKey;
use crate::report::ScoreRecord;

/// Whether `chi_squared <= best * window`, evaluated in integers.
pub fn within_window(chi_squared: Millionths, best: Millionths, window: Millionths) -> bool {
    chi_squared as u128 * SCALE as u128 <= best as u128 * window as u128
}

/// Flags every record inside the near-best window and returns how many there are.
pub fn mark_near_best(records: &mut [ScoreRecord], window: Millionths) -> usize {
    let Some(best) = records.iter().map(|r| r.chi_squared).min() else {
        return 0;
    };
    let mut members = 0;
    for record in records.iter_mut() {
        record.near_best = within_window(record.chi_squared, best, window);
        if record.near_best {
            members += 1;
        }
    }
    members
}

/// Selection order among blended candidates: higher blend first, then lower
/// χ², then the smaller key. A total order, so the outcome never depends on
/// evaluation order.
fn blended_order(
    a: (Millionths, Millionths, ShiftKey),
    b: (Millionths, Millionths, ShiftKey),
) -> Ordering {
    b.0.cmp(&a.0)
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| a.2.cmp(&b.2))
}

/// Ranking order over score records.
///
/// Near-best records come first, in selection order. Everything else follows
/// by ascending χ², then ascending key.
pub fn ranking_order(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    match (a.near_best, b.near_best) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => blended_order(
            (a.blended().unwrap_or(0), a.chi_squared, a.key),
            (b.blended().unwrap_or(0), b.chi_squared, b.key),
        ),
        (false, false) => a
            .chi_squared
            .cmp(&b.chi_squared)
            .then_with(|| a.key.cmp(&b.key)),
    }
}

/// Sorts records into ranking order; the winner ends up first.
pub fn rank(records: &mut [ScoreRecord]) {
    records.sort_by(ranking_order);
}

/// A pre-scored candidate for [`break_tie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieCandidate {
    pub key: ShiftKey,
    pub chi_squared: Millionths,
    pub scores: HeuristicScores,
}

/// Picks the winner among already-scored candidates with the blended rule.
///
/// Returns `None` for an empty slice.
pub fn break_tie(candidates: &[TieCandidate], weights: &BlendWeights) -> Option<ShiftKey> {
    candidates
        .iter()
        .map(|c| (c.scores.blend(weights), c.chi_squared, c.key))
        .min_by(|a, b| blended_order(*a, *b))
        .map(|(_, _, key)| key)
}
