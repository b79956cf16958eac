//! Integration tests for the configuration store and typed settings.

mod common;

use std::fs;

use serde_json::json;

use common::{SOURCEGRAPH_KEY, TestConfig};
use yso_commit::config::ConfigStore;
use yso_commit::{AiProvider, ConfigError, SettingsError, ValidationError};

#[test]
fn test_set_with_missing_parent_leaves_file_byte_identical() {
    let config = TestConfig::new();
    let before = fs::read(config.paths.file()).unwrap();
    let store = config.settings.store();

    let err = store
        .set_value("ai_providers.gemini.api_key", json!("x"))
        .unwrap_err();

    assert!(matches!(err, ConfigError::KeyNotFound(ref k) if k == "ai_providers.gemini.api_key"));
    assert_eq!(fs::read(config.paths.file()).unwrap(), before);
}

#[test]
fn test_writes_keep_document_order() {
    let config = TestConfig::new();
    config.set("default_lang", json!("pt_BR"));

    let raw = config.raw();
    let providers = raw.find("\"ai_providers\"").unwrap();
    let default_provider = raw.find("\"default_ai_provider\"").unwrap();
    let languages = raw.find("\"languages\"").unwrap();
    let default_lang = raw.find("\"default_lang\"").unwrap();

    assert!(providers < default_provider);
    assert!(default_provider < languages);
    assert!(languages < default_lang);
    assert!(raw.contains("\"default_lang\": \"pt_BR\""));
}

#[test]
fn test_no_temp_files_left_behind() {
    let config = TestConfig::new();
    config.set("ai_providers.sourcegraph.api_key", json!(SOURCEGRAPH_KEY));
    config.set("ai_providers.sourcegraph.api_key", json!(null));

    let entries: Vec<_> = fs::read_dir(config.paths.dir())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("config.json")]);
}

#[test]
fn test_malformed_file_is_reported_by_every_accessor() {
    let config = TestConfig::new();
    fs::write(config.paths.file(), "{\"ai_providers\": ").unwrap();

    assert!(matches!(
        config.settings.store().load(),
        Err(ConfigError::Malformed(_))
    ));
    assert!(matches!(
        config.settings.default_provider(),
        Err(SettingsError::Config(ConfigError::Malformed(_)))
    ));
}

#[test]
fn test_missing_default_key() {
    let config = TestConfig::new();
    fs::write(
        config.paths.file(),
        r#"{"ai_providers": {"cohere": {"enabled": true}}}"#,
    )
    .unwrap();

    let err = config.settings.default_provider().unwrap_err();
    assert_eq!(
        err.to_string(),
        "User configuration key 'default_ai_provider' not found."
    );
}

#[test]
fn test_default_provider_must_be_enabled() {
    let config = TestConfig::new();
    config.set("ai_providers.sourcegraph.enabled", json!(false));

    assert!(matches!(
        config.settings.default_provider(),
        Err(SettingsError::Validation(ValidationError::ProviderDisabled(
            AiProvider::Sourcegraph
        )))
    ));
}

#[test]
fn test_store_shares_file_between_instances() {
    let config = TestConfig::new();
    let other = ConfigStore::new(config.paths.clone());

    other
        .set_value("default_ai_provider", json!("openai"))
        .unwrap();

    assert_eq!(
        config.settings.default_provider().unwrap(),
        AiProvider::OpenAi
    );
}
