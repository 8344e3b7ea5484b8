// cryptor-stats/src/heuristics/mod.rs
//! Plausibility signals used to separate candidates whose χ² fits are too
//! close to call. Each signal lands in `[0, SCALE]`.

use libm::exp;

use crate::fixed::{clamp_unit, ratio_millionths, to_millionths};
use crate::keywords::KeywordHits;
use crate::observation::Observation;
use crate::{Millionths, SCALE};

/// Gaussian target for the share of vowels among letters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VowelTarget {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for VowelTarget {
    fn default() -> Self {
        Self {
            mean: 0.41,
            std_dev: 0.06,
        }
    }
}

/// Shape of the keyword score: a saturating curve on raw hits plus a capped
/// bonus per distinct keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordCurve {
    pub saturation: f64,
    pub diversity_step: f64,
    pub diversity_cap: f64,
}

impl Default for KeywordCurve {
    fn default() -> Self {
        Self {
            saturation: 4.0,
            diversity_step: 0.01,
            diversity_cap: 0.05,
        }
    }
}

/// Blend weights in millionths. They are expected to sum to `SCALE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendWeights {
    pub etaoin: Millionths,
    pub vowel: Millionths,
    pub keyword: Millionths,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            etaoin: 400_000,
            vowel: 300_000,
            keyword: 300_000,
        }
    }
}

/// The three signals for one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicScores {
    pub etaoin: Millionths,
    pub vowel: Millionths,
    pub keyword: Millionths,
}

impl HeuristicScores {
    /// Weighted sum of the three signals, in millionths.
    pub fn blend(&self, weights: &BlendWeights) -> Millionths {
        let weighted = weights.etaoin as u128 * self.etaoin as u128
            + weights.vowel as u128 * self.vowel as u128
            + weights.keyword as u128 * self.keyword as u128;
        (weighted / SCALE as u128) as Millionths
    }
}

/// Share of letters drawn from E, T, A, O, I, N.
pub fn etaoin_rate(observation: &Observation) -> Millionths {
    ratio_millionths(observation.etaoin_count(), observation.total())
}

/// Share of letters that are vowels, as a float.
pub fn vowel_ratio(observation: &Observation) -> f64 {
    observation.vowel_count() as f64 / observation.total() as f64
}

/// Unnormalized Gaussian kernel around the target: 1 at the mean, decaying
/// smoothly on either side, clamped into `[0, 1]`.
pub fn vowel_closeness(ratio: f64, target: &VowelTarget) -> f64 {
    let delta = ratio - target.mean;
    let variance = target.std_dev * target.std_dev;
    clamp_unit(exp(-(delta * delta) / (2.0 * variance)))
}

pub fn vowel_score(observation: &Observation, target: &VowelTarget) -> Millionths {
    to_millionths(vowel_closeness(vowel_ratio(observation), target))
}

/// `1 - e^(-hits/saturation)` plus `min(distinct * step, cap)`, clamped.
pub fn keyword_closeness(hits: &KeywordHits, curve: &KeywordCurve) -> f64 {
    if hits.hits == 0 {
        return 0.0;
    }
    let frequency = 1.0 - exp(-(hits.hits as f64) / curve.saturation);
    let diversity = (hits.distinct as f64 * curve.diversity_step).min(curve.diversity_cap);
    clamp_unit(frequency + diversity)
}

pub fn keyword_score(hits: &KeywordHits, curve: &KeywordCurve) -> Millionths {
    to_millionths(keyword_closeness(hits, curve))
}

/// Logistic squashing of a signed margin into `(0, 1)`; `0.5` at zero.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + exp(-x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etaoin_rate_basic() {
        // E,E,E,T,T plus five letters outside the set.
        let obs = Observation::scan("EEETT bcdfg").unwrap();
        assert_eq!(etaoin_rate(&obs), 500_000);
    }

    #[test]
    fn test_vowel_score_peaks_at_target() {
        let mut counts = [0u64; 26];
        counts[0] = 20; // A
        counts[4] = 21; // E
        counts[1] = 59; // B
        let obs = Observation::from_counts(counts).unwrap();
        assert_eq!(vowel_score(&obs, &VowelTarget::default()), SCALE);
    }

    #[test]
    fn test_vowel_score_far_from_target_is_small() {
        let mut counts = [0u64; 26];
        counts[0] = 10;
        counts[4] = 10;
        counts[1] = 80;
        let obs = Observation::from_counts(counts).unwrap();
        assert!(vowel_score(&obs, &VowelTarget::default()) < SCALE / 100);
    }

    #[test]
    fn test_vowel_score_stays_in_unit_interval_for_pathological_text() {
        let target = VowelTarget::default();
        for text in ["aeiouaeiou", "bcdfghjklmnpqrstvwxz", "a", "z"] {
            let score = vowel_score(&Observation::scan(text).unwrap(), &target);
            assert!(score <= SCALE, "{} scored {}", text, score);
        }
        assert_eq!(vowel_closeness(f64::INFINITY, &target), 0.0);
    }

    #[test]
    fn test_keyword_score_frequency_and_diversity() {
        let curve = KeywordCurve::default();
        assert_eq!(keyword_score(&KeywordHits::default(), &curve), 0);
        // 1 - e^(-5/4) + 0.05 = 0.763495...
        let five = KeywordHits { hits: 5, distinct: 5 };
        assert_eq!(keyword_score(&five, &curve), 763_495);
    }

    #[test]
    fn test_keyword_repeats_increase_score() {
        let curve = KeywordCurve::default();
        let base = keyword_score(&KeywordHits { hits: 1, distinct: 1 }, &curve);
        let more = keyword_score(&KeywordHits { hits: 4, distinct: 2 }, &curve);
        assert!(more > base);
    }

    #[test]
    fn test_keyword_score_saturates_at_one() {
        let flood = KeywordHits { hits: 10_000, distinct: 75 };
        assert_eq!(keyword_score(&flood, &KeywordCurve::default()), SCALE);
    }

    #[test]
    fn test_logistic_is_centered_and_monotone() {
        assert_eq!(logistic(0.0), 0.5);
        assert!(logistic(4.0) > 0.9);
        assert!(logistic(-4.0) < 0.1);
    }

    #[test]
    fn test_blend_uses_weights() {
        let scores = HeuristicScores { etaoin: 700_000, vowel: 600_000, keyword: 400_000 };
        // 0.4*0.7 + 0.3*0.6 + 0.3*0.4 = 0.58
        assert_eq!(scores.blend(&BlendWeights::default()), 580_000);
    }
}
