//! Configuration management for `cryptor-core`.
//!
//! The scoring policy (near-best window, blend weights, vowel target and the
//! keyword curve) is data, not code. This module defines the YAML-facing
//! [`ScorerConfig`], loads the embedded defaults or a user file, validates it,
//! and resolves it into the fixed-point [`ScorerParams`] the engine runs on.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use cryptor_stats::heuristics::{BlendWeights, KeywordCurve, VowelTarget};
use cryptor_stats::{Millionths, SCALE};

use crate::errors::CryptorError;

/// Candidates within 10% of the best χ² are re-ranked by heuristics.
pub const DEFAULT_NEAR_BEST_WINDOW: f64 = 1.10;
pub const DEFAULT_ETAOIN_WEIGHT: f64 = 0.40;
pub const DEFAULT_VOWEL_WEIGHT: f64 = 0.30;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.30;
pub const DEFAULT_VOWEL_MEAN: f64 = 0.41;
pub const DEFAULT_VOWEL_STD_DEV: f64 = 0.06;
pub const DEFAULT_KEYWORD_SATURATION: f64 = 4.0;
pub const DEFAULT_KEYWORD_DIVERSITY_STEP: f64 = 0.01;
pub const DEFAULT_KEYWORD_DIVERSITY_CAP: f64 = 0.05;
pub const DEFAULT_TOP_N: usize = 3;

/// Largest meaningful `top_n`: one entry per possible shift.
pub const MAX_TOP_N: usize = 26;

/// Allowed rounding slack when checking that the weights sum to one.
const WEIGHT_SUM_TOLERANCE: Millionths = 10;

/// Relative weight of each heuristic signal in the blended score.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeightConfig {
    pub etaoin: f64,
    pub vowel: f64,
    pub keyword: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            etaoin: DEFAULT_ETAOIN_WEIGHT,
            vowel: DEFAULT_VOWEL_WEIGHT,
            keyword: DEFAULT_KEYWORD_WEIGHT,
        }
    }
}

/// Gaussian target of the vowel-ratio signal.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VowelConfig {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for VowelConfig {
    fn default() -> Self {
        Self {
            mean: DEFAULT_VOWEL_MEAN,
            std_dev: DEFAULT_VOWEL_STD_DEV,
        }
    }
}

/// Keyword-hit curve and an optional replacement vocabulary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub saturation: f64,
    pub diversity_step: f64,
    pub diversity_cap: f64,
    /// Replaces the built-in common-word list when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            saturation: DEFAULT_KEYWORD_SATURATION,
            diversity_step: DEFAULT_KEYWORD_DIVERSITY_STEP,
            diversity_cap: DEFAULT_KEYWORD_DIVERSITY_CAP,
            words: None,
        }
    }
}

/// Top-level scorer configuration, as read from YAML.
///
/// Every field is optional in the file; omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Multiplier on the best χ² that bounds the near-best set (`>= 1.0`).
    pub near_best_window: f64,
    pub weights: WeightConfig,
    pub vowel_target: VowelConfig,
    pub keywords: KeywordConfig,
    /// `top_n` used when a caller asks for ranked output without a size.
    pub default_top_n: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            near_best_window: DEFAULT_NEAR_BEST_WINDOW,
            weights: WeightConfig::default(),
            vowel_target: VowelConfig::default(),
            keywords: KeywordConfig::default(),
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

/// Validated, fixed-point form of [`ScorerConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerParams {
    /// Near-best multiplier in millionths (`1_100_000` for 10%).
    pub window: Millionths,
    pub weights: BlendWeights,
    pub vowel_target: VowelTarget,
    pub keyword_curve: KeywordCurve,
    pub default_top_n: usize,
}

impl Default for ScorerParams {
    fn default() -> Self {
        Self {
            window: scale_up(DEFAULT_NEAR_BEST_WINDOW),
            weights: BlendWeights::default(),
            vowel_target: VowelTarget::default(),
            keyword_curve: KeywordCurve::default(),
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl ScorerConfig {
    /// Loads the scoring policy embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default scorer config from embedded string...");
        let default_yaml = include_str!("../config/default_scorer.yaml");
        let config: ScorerConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default scorer config")?;
        Ok(config)
    }

    /// Loads and validates a scorer configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scorer config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ScorerConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid scorer config in {}", path.display()))?;
        Ok(config)
    }

    /// Checks every policy value, reporting all problems at once.
    pub fn validate(&self) -> Result<(), CryptorError> {
        let mut errors = Vec::new();

        if !self.near_best_window.is_finite() || self.near_best_window < 1.0 {
            errors.push(format!("near_best_window must be >= 1.0, got {}", self.near_best_window));
        }

        for (name, w) in [
            ("etaoin", self.weights.etaoin),
            ("vowel", self.weights.vowel),
            ("keyword", self.weights.keyword),
        ] {
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                errors.push(format!("weights.{} must be within [0, 1], got {}", name, w));
            }
        }
        let weight_sum = scale_up(self.weights.etaoin)
            + scale_up(self.weights.vowel)
            + scale_up(self.weights.keyword);
        if weight_sum.abs_diff(SCALE) > WEIGHT_SUM_TOLERANCE {
            errors.push(format!(
                "weights must sum to 1.0, got {:.6}",
                weight_sum as f64 / SCALE as f64
            ));
        }

        let vowel = &self.vowel_target;
        if !vowel.mean.is_finite() || !(0.0..=1.0).contains(&vowel.mean) {
            errors.push(format!("vowel_target.mean must be within [0, 1], got {}", vowel.mean));
        }
        if !vowel.std_dev.is_finite() || vowel.std_dev <= 0.0 {
            errors.push(format!("vowel_target.std_dev must be > 0, got {}", vowel.std_dev));
        }

        let kw = &self.keywords;
        if !kw.saturation.is_finite() || kw.saturation <= 0.0 {
            errors.push(format!("keywords.saturation must be > 0, got {}", kw.saturation));
        }
        if !kw.diversity_step.is_finite() || kw.diversity_step < 0.0 {
            errors.push(format!("keywords.diversity_step must be >= 0, got {}", kw.diversity_step));
        }
        if !kw.diversity_cap.is_finite() || kw.diversity_cap < 0.0 {
            errors.push(format!("keywords.diversity_cap must be >= 0, got {}", kw.diversity_cap));
        }
        if let Some(words) = &kw.words {
            let mut seen = HashSet::new();
            if words.is_empty() {
                errors.push("keywords.words must not be empty when set".to_string());
            }
            for word in words {
                if word.trim().is_empty() {
                    errors.push("keywords.words contains an empty word".to_string());
                } else if !seen.insert(word.to_ascii_lowercase()) {
                    errors.push(format!("keywords.words contains '{}' more than once", word));
                }
            }
        }

        if !(1..=MAX_TOP_N).contains(&self.default_top_n) {
            errors.push(format!(
                "default_top_n must be between 1 and {}, got {}",
                MAX_TOP_N, self.default_top_n
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CryptorError::InvalidConfig(errors.join("; ")))
        }
    }

    /// Validates and converts to fixed-point parameters.
    pub fn resolve(&self) -> Result<ScorerParams, CryptorError> {
        self.validate()?;
        Ok(ScorerParams {
            window: scale_up(self.near_best_window),
            weights: BlendWeights {
                etaoin: scale_up(self.weights.etaoin),
                vowel: scale_up(self.weights.vowel),
                keyword: scale_up(self.weights.keyword),
            },
            vowel_target: VowelTarget {
                mean: self.vowel_target.mean,
                std_dev: self.vowel_target.std_dev,
            },
            keyword_curve: KeywordCurve {
                saturation: self.keywords.saturation,
                diversity_step: self.keywords.diversity_step,
                diversity_cap: self.keywords.diversity_cap,
            },
            default_top_n: self.default_top_n,
        })
    }
}

/// Rounds a non-negative policy value to millionths. Unlike scores, it may exceed one.
fn scale_up(value: f64) -> Millionths {
    (value.max(0.0) * SCALE as f64).round() as Millionths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match_constants() {
        let embedded = ScorerConfig::load_default().unwrap();
        assert_eq!(embedded, ScorerConfig::default());
    }

    #[test]
    fn test_default_resolves_to_default_params() {
        let params = ScorerConfig::default().resolve().unwrap();
        assert_eq!(params, ScorerParams::default());
        assert_eq!(params.window, 1_100_000);
        assert_eq!(params.weights.etaoin + params.weights.vowel + params.weights.keyword, SCALE);
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = ScorerConfig::default();
        config.near_best_window = 0.9;
        config.weights.keyword = 0.5;
        config.vowel_target.std_dev = 0.0;
        config.default_top_n = 0;

        let err = config.validate().unwrap_err();
        let CryptorError::InvalidConfig(msg) = err else {
            panic!("expected InvalidConfig, got {:?}", err);
        };
        assert!(msg.contains("near_best_window"));
        assert!(msg.contains("sum to 1.0"));
        assert!(msg.contains("std_dev"));
        assert!(msg.contains("default_top_n"));
    }

    #[test]
    fn test_duplicate_keywords_rejected_case_insensitively() {
        let mut config = ScorerConfig::default();
        config.keywords.words = Some(vec!["The".into(), "the".into()]);
        assert!(config.validate().is_err());
    }
}
