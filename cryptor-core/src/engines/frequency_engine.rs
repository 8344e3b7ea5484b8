// cryptor-core/src/engines/frequency_engine.rs
//! A `RecoveryEngine` that ranks every shift by χ² against English letter
//! frequencies and settles near-ties with the blended heuristic score.
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;

use cryptor_stats::chi_squared::chi_squared;
use cryptor_stats::heuristics::{etaoin_rate, keyword_score, vowel_score, HeuristicScores};
use cryptor_stats::keywords::KeywordScanner;
use cryptor_stats::observation::{unshift_lowercase, Observation};
use cryptor_stats::Millionths;

use crate::cipher::{decode, ShiftKey};
use crate::config::{ScorerConfig, ScorerParams};
use crate::engine::RecoveryEngine;
use crate::errors::CryptorError;
use crate::report::{
    evidence_against, Certainty, DecryptionResult, RankedCandidate, RecoveryOptions, ScoreRecord,
    Signals,
};
use crate::selector::{mark_near_best, rank};

static DEFAULT_ENGINE: Lazy<FrequencyEngine> = Lazy::new(FrequencyEngine::with_defaults);

/// Recovers the key of `ciphertext` with the built-in scoring policy.
pub fn recover_key(
    ciphertext: &str,
    options: RecoveryOptions,
) -> Result<DecryptionResult, CryptorError> {
    DEFAULT_ENGINE.recover(ciphertext, &options)
}

/// Letter-frequency key-recovery engine.
#[derive(Debug)]
pub struct FrequencyEngine {
    params: ScorerParams,
    scanner: KeywordScanner,
}

/// The two lowest χ² values, used as each candidate's rival for evidence.
struct Rivals {
    best: (Millionths, ShiftKey),
    runner_up: Millionths,
}

impl Rivals {
    fn from_records(records: &[ScoreRecord]) -> Self {
        let mut by_fit: Vec<(Millionths, ShiftKey)> =
            records.iter().map(|r| (r.chi_squared, r.key)).collect();
        by_fit.sort();
        let best = by_fit.first().copied().unwrap_or((0, ShiftKey::normalized(0)));
        let runner_up = by_fit.get(1).map(|&(chi, _)| chi).unwrap_or(best.0);
        Self { best, runner_up }
    }

    fn rival_of(&self, key: ShiftKey) -> Millionths {
        if key == self.best.1 {
            self.runner_up
        } else {
            self.best.0
        }
    }
}

impl FrequencyEngine {
    /// Builds an engine from a scorer configuration, validating it first.
    pub fn new(config: ScorerConfig) -> Result<Self, CryptorError> {
        let params = config.resolve()?;
        let scanner = match &config.keywords.words {
            Some(words) => KeywordScanner::with_words(words)
                .map_err(|e| CryptorError::KeywordAutomaton(e.to_string()))?,
            None => KeywordScanner::new(),
        };

        debug!(
            "Initializing FrequencyEngine with window {} and weights {:?}",
            params.window, params.weights
        );
        Ok(Self { params, scanner })
    }

    /// Engine running the built-in policy and vocabulary.
    pub fn with_defaults() -> Self {
        Self {
            params: ScorerParams::default(),
            scanner: KeywordScanner::new(),
        }
    }

    /// The shared, lazily-built engine behind [`recover_key`].
    pub fn shared() -> &'static FrequencyEngine {
        &DEFAULT_ENGINE
    }

    /// The three heuristic signals for one key, blended with the configured weights.
    fn signals_for(&self, ciphertext: &str, base: &Observation, key: ShiftKey) -> Signals {
        let observation = base.shifted_back(key.value());
        let decoded = unshift_lowercase(ciphertext, key.value());
        let hits = self.scanner.scan(&decoded);

        let scores = HeuristicScores {
            etaoin: etaoin_rate(&observation),
            vowel: vowel_score(&observation, &self.params.vowel_target),
            keyword: keyword_score(&hits, &self.params.keyword_curve),
        };
        Signals::from_scores(scores, &self.params.weights)
    }

    /// Scores all 26 shifts and returns them in ranking order.
    ///
    /// Heuristics are only computed when more than one key falls inside the
    /// near-best window.
    pub fn score_candidates(&self, ciphertext: &str, base: &Observation) -> Vec<ScoreRecord> {
        let mut records: Vec<ScoreRecord> = ShiftKey::all()
            .map(|key| ScoreRecord::new(key, chi_squared(&base.shifted_back(key.value()))))
            .collect();

        let members = mark_near_best(&mut records, self.params.window);
        if members > 1 {
            for record in records.iter_mut().filter(|r| r.near_best) {
                record.signals = Some(self.signals_for(ciphertext, base, record.key));
            }
        }

        for record in &records {
            debug!(
                "[k={:02}] chi2={} near_best={} blended={:?}",
                record.key.value(),
                record.chi_squared,
                record.near_best,
                record.blended()
            );
        }

        rank(&mut records);
        records
    }

    fn candidate(
        &self,
        ciphertext: &str,
        record: ScoreRecord,
        position: usize,
        rivals: &Rivals,
    ) -> RankedCandidate {
        let evidence = evidence_against(record.chi_squared, rivals.rival_of(record.key));
        RankedCandidate {
            rank: position,
            record,
            evidence,
            certainty: Certainty::from_evidence(evidence),
            plaintext: decode(ciphertext, record.key),
        }
    }
}

impl RecoveryEngine for FrequencyEngine {
    fn recover(
        &self,
        ciphertext: &str,
        options: &RecoveryOptions,
    ) -> Result<DecryptionResult, CryptorError> {
        options.validate()?;

        let Some(base) = Observation::scan(ciphertext) else {
            debug!("Input has no alphabetic characters; returning low-confidence result.");
            return Ok(DecryptionResult::LowConfidence);
        };

        let records = self.score_candidates(ciphertext, &base);
        let rivals = Rivals::from_records(&records);

        if options.return_all {
            let candidates = records
                .iter()
                .take(options.top_n)
                .enumerate()
                .map(|(idx, record)| {
                    let mut record = *record;
                    // Diagnostic only: the ranking above is already fixed.
                    if record.signals.is_none() {
                        record.signals = Some(self.signals_for(ciphertext, &base, record.key));
                    }
                    self.candidate(ciphertext, record, idx + 1, &rivals)
                })
                .collect();
            return Ok(DecryptionResult::Ranked { candidates });
        }

        let Some(winner) = records.first() else {
            return Ok(DecryptionResult::LowConfidence);
        };
        let best = self.candidate(ciphertext, *winner, 1, &rivals);
        debug!(
            "best=k={} chi2={} blended={:?} evidence={} certainty={}",
            best.key(),
            best.record.chi_squared,
            best.record.blended(),
            best.evidence,
            best.certainty
        );
        Ok(DecryptionResult::Best(best))
    }

    fn params(&self) -> &ScorerParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encode;
    use cryptor_stats::SCALE;

    const PASSAGE: &str = "It was the best of times, it was the worst of times, it was the age of \
        wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
        incredulity, it was the season of Light, it was the season of Darkness, it was the spring \
        of hope, it was the winter of despair.";

    fn key(v: u8) -> ShiftKey {
        ShiftKey::new(v).unwrap()
    }

    #[test]
    fn test_no_letters_returns_sentinel() {
        for text in ["12345 !!!", "", "   --  ", "12345!!!   --  "] {
            let result = recover_key(text, RecoveryOptions::default()).unwrap();
            assert_eq!(result, DecryptionResult::LowConfidence, "input {:?}", text);
            let ranked = recover_key(text, RecoveryOptions::ranked(5)).unwrap();
            assert!(ranked.is_low_confidence());
        }
    }

    #[test]
    fn test_invalid_top_n_is_rejected_before_scoring() {
        let err = recover_key("12345", RecoveryOptions::ranked(0)).unwrap_err();
        assert_eq!(err, CryptorError::InvalidTopN { requested: 0, max: 26 });
        assert!(recover_key(PASSAGE, RecoveryOptions { return_all: false, top_n: 27 }).is_err());
    }

    #[test]
    fn test_long_passage_recovers_every_key() {
        assert!(PASSAGE.len() > 200);
        for k in ShiftKey::all() {
            let cipher = encode(PASSAGE, k);
            let result = recover_key(&cipher, RecoveryOptions::default()).unwrap();
            let best = result.best().unwrap();
            assert_eq!(best.key(), k);
            assert_eq!(best.plaintext, PASSAGE);
            assert_eq!(best.certainty, Certainty::High);
        }
    }

    #[test]
    fn test_finds_known_shift_in_short_message() {
        let plaintext = "Meet at Dawn, bring 3 torches!";
        for k in [0u8, 1, 5, 13, 25] {
            let cipher = encode(plaintext, key(k));
            let result = recover_key(&cipher, RecoveryOptions::default()).unwrap();
            assert_eq!(result.key(), Some(key(k)));
            assert_eq!(result.best().unwrap().plaintext, plaintext);
        }
    }

    #[test]
    fn test_pangram_example() {
        let cipher = "Wkh txlfn eurzq ira mxpsv ryhu wkh odcb grj";
        let result = recover_key(cipher, RecoveryOptions::default()).unwrap();
        assert_eq!(result.key(), Some(key(3)));
        assert!(result.best().unwrap().plaintext.starts_with("The quick brown fox"));
    }

    #[test]
    fn test_heuristics_override_chi_squared_inside_window() {
        // Shifts 8 ("st") and 13 ("no") are within 10%; 8 fits χ² slightly
        // better, but "no" is a keyword made of ETAOIN letters.
        let engine = FrequencyEngine::with_defaults();
        let base = Observation::scan("ab").unwrap();
        let records = engine.score_candidates("ab", &base);

        let near: Vec<u8> = records.iter().filter(|r| r.near_best).map(|r| r.key.value()).collect();
        assert_eq!(near, vec![13, 8]);
        assert!(records[1].chi_squared < records[0].chi_squared);
        assert_eq!(records[0].blended(), Some(566_755));

        let result = engine.recover("ab", &RecoveryOptions::default()).unwrap();
        assert_eq!(result.key(), Some(key(13)));
        assert_eq!(result.best().unwrap().plaintext, "no");
    }

    #[test]
    fn test_single_near_best_member_skips_heuristics() {
        let result = recover_key(&encode(PASSAGE, key(11)), RecoveryOptions::default()).unwrap();
        let best = result.best().unwrap();
        assert!(best.record.near_best);
        assert!(best.record.signals.is_none());
    }

    #[test]
    fn test_return_all_is_a_view_over_the_same_ranking() {
        let msg = "The quick brown fox jumps over the lazy dog.";
        for k in [0u8, 7, 13] {
            let cipher = encode(msg, key(k));
            let single = recover_key(&cipher, RecoveryOptions::default()).unwrap();
            let ranked = recover_key(&cipher, RecoveryOptions::ranked(3)).unwrap();

            let candidates = ranked.candidates();
            assert_eq!(candidates.len(), 3);
            assert_eq!(candidates[0].key(), single.key().unwrap());
            assert_eq!(candidates[0].key(), key(k));
            let ranks: Vec<usize> = candidates.iter().map(|c| c.rank).collect();
            assert_eq!(ranks, vec![1, 2, 3]);
            assert!(candidates.iter().all(|c| c.record.signals.is_some()));
        }
    }

    #[test]
    fn test_top_26_lists_every_key_once() {
        let ranked = recover_key(&encode(PASSAGE, key(4)), RecoveryOptions::ranked(26)).unwrap();
        let mut keys: Vec<u8> = ranked.candidates().iter().map(|c| c.key().value()).collect();
        keys.sort();
        assert_eq!(keys, (0..26).collect::<Vec<u8>>());
    }

    #[test]
    fn test_recovery_is_deterministic() {
        let cipher = encode("Yes no maybe, perhaps at noon.", key(9));
        let first = recover_key(&cipher, RecoveryOptions::ranked(26)).unwrap();
        let second = recover_key(&cipher, RecoveryOptions::ranked(26)).unwrap();
        assert_eq!(first, second);
        let fresh = FrequencyEngine::with_defaults()
            .recover(&cipher, &RecoveryOptions::ranked(26))
            .unwrap();
        assert_eq!(first, fresh);
    }

    #[test]
    fn test_signals_stay_in_unit_interval_for_pathological_text() {
        for text in ["aeiou aeiou aeiou", "bcdfg hjklm npqrst", "the the the the the the the a an"] {
            let ranked = recover_key(text, RecoveryOptions::ranked(26)).unwrap();
            for c in ranked.candidates() {
                let s = c.record.signals.unwrap();
                assert!(s.etaoin <= SCALE && s.vowel <= SCALE && s.keyword <= SCALE && s.blended <= SCALE);
                assert!(c.evidence <= SCALE);
            }
        }
    }

    #[test]
    fn test_custom_config_changes_policy() {
        let mut config = ScorerConfig::default();
        config.keywords.words = Some(vec!["st".to_string()]);
        config.weights.etaoin = 0.0;
        config.weights.vowel = 0.0;
        config.weights.keyword = 1.0;
        let engine = FrequencyEngine::new(config).unwrap();
        let result = engine.recover("ab", &RecoveryOptions::default()).unwrap();
        assert_eq!(result.key(), Some(key(8)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ScorerConfig::default();
        config.near_best_window = 0.5;
        assert!(matches!(FrequencyEngine::new(config), Err(CryptorError::InvalidConfig(_))));
    }
}
