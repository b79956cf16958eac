//! Typed accessors over the user configuration.

use std::env;

use serde_json::Value;

use super::store::ConfigStore;
use crate::domain::{AiProvider, ApiKey, Language};
use crate::error::{ConfigError, SettingsError, ValidationError};

#[derive(Debug, Clone)]
pub struct Settings {
    store: ConfigStore,
}

impl Settings {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    // ============================================
    // Providers
    // ============================================

    pub fn is_provider_enabled(&self, provider: AiProvider) -> Result<bool, ConfigError> {
        self.read_enabled(&format!("ai_providers.{}.enabled", provider.as_str()))
    }

    pub fn ensure_provider_enabled(&self, provider: AiProvider) -> Result<(), SettingsError> {
        if !self.is_provider_enabled(provider)? {
            return Err(ValidationError::ProviderDisabled(provider).into());
        }
        Ok(())
    }

    /// The configured default provider. It must parse and be enabled.
    pub fn default_provider(&self) -> Result<AiProvider, SettingsError> {
        let id = self.read_string("default_ai_provider")?;
        let provider = AiProvider::parse(&id)?;
        self.ensure_provider_enabled(provider)?;
        Ok(provider)
    }

    pub fn set_default_provider(&self, provider: AiProvider) -> Result<(), SettingsError> {
        self.ensure_provider_enabled(provider)?;
        self.store
            .set_value("default_ai_provider", Value::from(provider.as_str()))?;
        Ok(())
    }

    /// Enabled providers in the order they appear in the configuration file.
    pub fn enabled_providers(&self) -> Result<Vec<AiProvider>, SettingsError> {
        let providers = self.store.get_value("ai_providers")?;
        let entries = providers.as_object().ok_or(ConfigError::InvalidValue {
            key: "ai_providers".to_string(),
            expected: "an object",
        })?;

        let mut enabled = Vec::new();
        for (id, entry) in entries {
            let provider = AiProvider::parse(id)?;
            let key = format!("ai_providers.{}.enabled", id);
            if enabled_flag(&key, entry.get("enabled"))? {
                enabled.push(provider);
            }
        }

        if enabled.is_empty() {
            return Err(ValidationError::NoEnabledProviders.into());
        }
        Ok(enabled)
    }

    // ============================================
    // Languages
    // ============================================

    pub fn is_language_enabled(&self, language: Language) -> Result<bool, ConfigError> {
        self.read_enabled(&format!("languages.{}.enabled", language.as_str()))
    }

    pub fn ensure_language_enabled(&self, language: Language) -> Result<(), SettingsError> {
        if !self.is_language_enabled(language)? {
            return Err(ValidationError::LanguageDisabled(language).into());
        }
        Ok(())
    }

    pub fn default_language(&self) -> Result<Language, SettingsError> {
        let id = self.read_string("default_lang")?;
        let language = Language::parse(&id)?;
        self.ensure_language_enabled(language)?;
        Ok(language)
    }

    // ============================================
    // API keys and models
    // ============================================

    /// The key to use for `provider`.
    ///
    /// A null or empty stored key falls back to the provider's environment
    /// variable. Whatever is found must match the provider's key format.
    pub fn api_key(&self, provider: AiProvider) -> Result<ApiKey, SettingsError> {
        let raw = match self.stored_api_key(provider)? {
            Some(key) => key,
            None => env::var(provider.api_key_env_var()).unwrap_or_default(),
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingApiKey(provider).into());
        }

        Ok(ApiKey::parse(provider, raw)?)
    }

    /// The key as stored in the configuration, without environment fallback.
    pub fn stored_api_key(&self, provider: AiProvider) -> Result<Option<String>, ConfigError> {
        let key = format!("ai_providers.{}.api_key", provider.as_str());
        match self.store.get_value(&key)? {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => Ok(Some(s)),
            _ => Err(ConfigError::InvalidValue {
                key,
                expected: "a string or null",
            }),
        }
    }

    pub fn set_api_key(&self, key: &ApiKey) -> Result<(), ConfigError> {
        let path = format!("ai_providers.{}.api_key", key.provider().as_str());
        self.store.set_value(&path, Value::from(key.as_str()))
    }

    pub fn remove_api_key(&self, provider: AiProvider) -> Result<(), ConfigError> {
        let path = format!("ai_providers.{}.api_key", provider.as_str());
        self.store.set_value(&path, Value::Null)
    }

    /// Configured model for `provider`, else the registry default.
    pub fn default_model(&self, provider: AiProvider) -> Result<Option<String>, ConfigError> {
        let key = format!("ai_providers.{}.default_model", provider.as_str());
        let fallback = || provider.default_model().map(str::to_string);

        match self.store.get_value(&key) {
            Ok(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s)),
            Ok(Value::String(_)) | Ok(Value::Null) | Err(ConfigError::KeyNotFound(_)) => {
                Ok(fallback())
            }
            Ok(_) => Err(ConfigError::InvalidValue {
                key,
                expected: "a string or null",
            }),
            Err(e) => Err(e),
        }
    }

    fn read_enabled(&self, key: &str) -> Result<bool, ConfigError> {
        match self.store.get_value(key) {
            Ok(value) => enabled_flag(key, Some(&value)),
            Err(ConfigError::KeyNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn read_string(&self, key: &str) -> Result<String, ConfigError> {
        match self.store.get_value(key)? {
            Value::String(s) => Ok(s),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                expected: "a string",
            }),
        }
    }
}

/// Absent means disabled; anything but a boolean is a configuration error.
fn enabled_flag(key: &str, value: Option<&Value>) -> Result<bool, ConfigError> {
    match value {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            expected: "a boolean",
        }),
    }
}
