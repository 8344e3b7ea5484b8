// cryptor-core/tests/message_store_tests.rs
use anyhow::Result;
use std::fs;
use tempfile::tempdir;
use test_log::test;

use cryptor_core::{
    encode, load_messages, try_decode, DecodeOutcome, FrequencyEngine, KeySource, ShiftKey,
};

const STORE: &str = r#"{
    "greeting": { "text": "Ebiil, Tloia!", "meta": { "encoded": true, "offset": 3, "cipher": "caesar" } },
    "plain":    { "text": "See you at noon.", "meta": { "encoded": false } },
    "mystery":  { "text": "Wkh txlfn eurzq ira mxpsv ryhu wkh odcb grj", "meta": { "encoded": true, "offset": null } },
    "vig":      { "text": "Lxfopv ef rkjj", "meta": { "encoded": true, "cipher": "Vigenere" } },
    "digits":   { "text": "4 8 15 16 23 42", "meta": { "encoded": true, "offset": false } }
}"#;

#[test]
fn test_missing_store_is_empty() -> Result<()> {
    let dir = tempdir()?;
    let messages = load_messages(dir.path().join("received.json"))?;
    assert!(messages.is_empty());
    Ok(())
}

#[test]
fn test_malformed_store_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("received.json");
    fs::write(&path, "{ not json")?;
    assert!(load_messages(&path).is_err());
    fs::write(&path, "\"just a string\"")?;
    assert!(load_messages(&path).is_err());
    Ok(())
}

#[test]
fn test_decode_every_stored_message() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("received.json");
    fs::write(&path, STORE)?;

    let messages = load_messages(&path)?;
    assert_eq!(messages.len(), 5);

    let engine = FrequencyEngine::shared();
    let outcome = |id: &str| -> Result<DecodeOutcome> {
        let message = messages.iter().find(|m| m.id == id).expect("message present");
        Ok(try_decode(&message.text, &message.meta, engine)?)
    };

    assert_eq!(outcome("greeting")?.text(), Some("Hello, World!"));
    assert_eq!(outcome("plain")?, DecodeOutcome::Plaintext("See you at noon.".into()));
    assert_eq!(
        outcome("mystery")?,
        DecodeOutcome::Decoded {
            text: "The quick brown fox jumps over the lazy dog".into(),
            key: ShiftKey::new(3).unwrap(),
            source: KeySource::Recovered,
        }
    );
    assert!(outcome("vig")?.describe().contains("unsupported cipher"));
    assert!(outcome("digits")?.describe().contains("Unable to decode"));
    Ok(())
}

#[test]
fn test_list_store_round_trips_through_encode() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("list.json");
    let secret = encode("Meet me by the old mill", ShiftKey::new(11).unwrap());
    let store = serde_json::json!([
        { "message": secret, "meta": { "encoded": true, "offset": 15 } }
    ]);
    fs::write(&path, serde_json::to_string(&store)?)?;

    let messages = load_messages(&path)?;
    assert_eq!(messages[0].id, "0");
    let out = try_decode(&messages[0].text, &messages[0].meta, FrequencyEngine::shared())?;
    assert_eq!(out.text(), Some("Meet me by the old mill"));
    Ok(())
}
