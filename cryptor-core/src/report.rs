// cryptor-core/src/report.rs
//! Data structures for reporting key-recovery outcomes.
//!
//! A [`ScoreRecord`] is the per-key working state of one recovery call; a
//! [`RankedCandidate`] is what leaves the engine, with the decoded text and a
//! confidence marker attached. [`DecryptionResult`] is either one candidate,
//! a ranked list, or the low-confidence sentinel for text with no letters.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use std::fmt;

use cryptor_stats::heuristics::{logistic, BlendWeights, HeuristicScores};
use cryptor_stats::fixed::to_millionths;
use cryptor_stats::Millionths;

use crate::cipher::ShiftKey;
use crate::config::{DEFAULT_TOP_N, MAX_TOP_N};
use crate::errors::CryptorError;

/// Steepness of the logistic that turns a χ² margin into evidence.
pub const EVIDENCE_STEEPNESS: f64 = 4.0;
/// Evidence at or above which a candidate is graded [`Certainty::High`].
pub const HIGH_CERTAINTY_EVIDENCE: Millionths = 900_000;
/// Evidence at or above which a candidate is graded [`Certainty::Moderate`].
pub const MODERATE_CERTAINTY_EVIDENCE: Millionths = 600_000;

/// Heuristic signals and their blend for one candidate, all in millionths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub etaoin: Millionths,
    pub vowel: Millionths,
    pub keyword: Millionths,
    pub blended: Millionths,
}

impl Signals {
    pub fn from_scores(scores: HeuristicScores, weights: &BlendWeights) -> Self {
        Self {
            etaoin: scores.etaoin,
            vowel: scores.vowel,
            keyword: scores.keyword,
            blended: scores.blend(weights),
        }
    }
}

/// Per-key scores for a single recovery call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub key: ShiftKey,
    /// χ² against English letter frequencies, in millionths. Lower is better.
    pub chi_squared: Millionths,
    /// Whether χ² fell inside the near-best window.
    pub near_best: bool,
    /// Present only when the heuristics were computed for this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<Signals>,
}

impl ScoreRecord {
    pub fn new(key: ShiftKey, chi_squared: Millionths) -> Self {
        Self {
            key,
            chi_squared,
            near_best: false,
            signals: None,
        }
    }

    pub fn blended(&self) -> Option<Millionths> {
        self.signals.map(|s| s.blended)
    }
}

/// Coarse grade of how clearly a candidate stands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Certainty {
    Low,
    Moderate,
    High,
}

impl Certainty {
    pub fn from_evidence(evidence: Millionths) -> Self {
        if evidence >= HIGH_CERTAINTY_EVIDENCE {
            Certainty::High
        } else if evidence >= MODERATE_CERTAINTY_EVIDENCE {
            Certainty::Moderate
        } else {
            Certainty::Low
        }
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Certainty::Low => "low",
            Certainty::Moderate => "moderate",
            Certainty::High => "high",
        };
        f.write_str(label)
    }
}

/// Squashes a signed margin in `[-1, 1]` into `(0, 1)`.
pub fn compute_evidence(margin: f64) -> f64 {
    logistic(EVIDENCE_STEEPNESS * margin)
}

/// Evidence that `own` beats `rival`, from their relative χ² margin, in millionths.
pub fn evidence_against(own: Millionths, rival: Millionths) -> Millionths {
    let larger = own.max(rival);
    let margin = if larger == 0 {
        0.0
    } else {
        (rival as f64 - own as f64) / larger as f64
    };
    to_millionths(compute_evidence(margin))
}

/// One reported candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    /// 1-based position in the ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub record: ScoreRecord,
    pub evidence: Millionths,
    pub certainty: Certainty,
    pub plaintext: String,
}

impl RankedCandidate {
    pub fn key(&self) -> ShiftKey {
        self.record.key
    }
}

/// Outcome of one key-recovery call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecryptionResult {
    /// The text has no letters; there is no statistical signal to act on.
    LowConfidence,
    /// The single best candidate.
    Best(RankedCandidate),
    /// Up to `top_n` candidates, best first.
    Ranked { candidates: Vec<RankedCandidate> },
}

impl DecryptionResult {
    pub fn is_low_confidence(&self) -> bool {
        matches!(self, DecryptionResult::LowConfidence)
    }

    /// The winning candidate, if any key was recovered.
    pub fn best(&self) -> Option<&RankedCandidate> {
        self.candidates().first()
    }

    pub fn key(&self) -> Option<ShiftKey> {
        self.best().map(RankedCandidate::key)
    }

    /// All reported candidates, best first. Empty for the sentinel.
    pub fn candidates(&self) -> &[RankedCandidate] {
        match self {
            DecryptionResult::LowConfidence => &[],
            DecryptionResult::Best(candidate) => std::slice::from_ref(candidate),
            DecryptionResult::Ranked { candidates } => candidates,
        }
    }
}

/// Caller options for a recovery call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryOptions {
    /// Report a ranked list instead of a single winner.
    pub return_all: bool,
    /// Size of the ranked list; must be within `1..=26` even when unused.
    pub top_n: usize,
}

impl Default for RecoveryOptions {
    fn default() -> Self {
        Self {
            return_all: false,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RecoveryOptions {
    pub fn ranked(top_n: usize) -> Self {
        Self { return_all: true, top_n }
    }

    /// Rejects an out-of-range `top_n` instead of clamping it.
    pub fn validate(&self) -> Result<(), CryptorError> {
        if (1..=MAX_TOP_N).contains(&self.top_n) {
            Ok(())
        } else {
            Err(CryptorError::InvalidTopN {
                requested: self.top_n,
                max: MAX_TOP_N,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_edges() {
        assert!(compute_evidence(1.0) > 0.9);
        assert!(compute_evidence(-1.0) < 0.1);
        assert_eq!(evidence_against(0, 0), 500_000);
    }

    #[test]
    fn test_evidence_grows_with_margin() {
        let close = evidence_against(100, 105);
        let clear = evidence_against(100, 400);
        assert!(clear > close);
        assert_eq!(Certainty::from_evidence(clear), Certainty::High);
        assert_eq!(Certainty::from_evidence(evidence_against(400, 100)), Certainty::Low);
    }

    #[test]
    fn test_top_n_bounds_are_enforced() {
        assert!(RecoveryOptions::ranked(1).validate().is_ok());
        assert!(RecoveryOptions::ranked(26).validate().is_ok());
        assert_eq!(
            RecoveryOptions::ranked(0).validate(),
            Err(CryptorError::InvalidTopN { requested: 0, max: 26 })
        );
        assert!(RecoveryOptions::ranked(27).validate().is_err());
    }

    #[test]
    fn test_sentinel_has_no_key() {
        let result = DecryptionResult::LowConfidence;
        assert!(result.is_low_confidence());
        assert!(result.key().is_none());
        assert!(result.candidates().is_empty());
    }

    #[test]
    fn test_sentinel_serializes_with_outcome_tag() {
        let json = serde_json::to_value(DecryptionResult::LowConfidence).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "low_confidence" }));
    }
}
