// cryptor-core/tests/scorer_config_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use cryptor_core::config::{ScorerConfig, DEFAULT_TOP_N};
use cryptor_core::{FrequencyEngine, RecoveryEngine, RecoveryOptions, ShiftKey};

fn write_yaml(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_default_config() {
    let config = ScorerConfig::load_default().unwrap();
    assert_eq!(config, ScorerConfig::default());
    assert_eq!(config.default_top_n, DEFAULT_TOP_N);
    assert!(config.keywords.words.is_none());
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() -> Result<()> {
    let file = write_yaml(
        r#"
near_best_window: 1.25
default_top_n: 5
"#,
    )?;
    let config = ScorerConfig::load_from_file(file.path())?;
    assert_eq!(config.near_best_window, 1.25);
    assert_eq!(config.default_top_n, 5);
    assert_eq!(config.weights, ScorerConfig::default().weights);

    let params = config.resolve()?;
    assert_eq!(params.window, 1_250_000);
    Ok(())
}

#[test]
fn test_custom_vocabulary_drives_the_engine() -> Result<()> {
    // Only "st" is a keyword and only keywords count, so for "ab" the
    // near-best shift 8 ("st") beats shift 13 ("no").
    let file = write_yaml(
        r#"
weights:
  etaoin: 0.0
  vowel: 0.0
  keyword: 1.0
keywords:
  words: [st]
"#,
    )?;
    let config = ScorerConfig::load_from_file(file.path())?;
    let engine = FrequencyEngine::new(config)?;
    let result = engine.recover("ab", &RecoveryOptions::default())?;
    assert_eq!(result.key(), ShiftKey::new(8));
    Ok(())
}

#[test]
fn test_invalid_file_reports_every_problem() -> Result<()> {
    let file = write_yaml(
        r#"
near_best_window: 0.8
weights:
  etaoin: 0.5
  vowel: 0.5
  keyword: 0.5
default_top_n: 0
"#,
    )?;
    let err = ScorerConfig::load_from_file(file.path()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("near_best_window"), "{}", msg);
    assert!(msg.contains("sum to 1.0"), "{}", msg);
    assert!(msg.contains("default_top_n"), "{}", msg);
    Ok(())
}

#[test]
fn test_malformed_yaml_and_missing_file_are_errors() -> Result<()> {
    let file = write_yaml("near_best_window: [not, a, number]")?;
    assert!(ScorerConfig::load_from_file(file.path()).is_err());
    assert!(ScorerConfig::load_from_file("/definitely/not/here.yaml").is_err());
    Ok(())
}
