//! Provider-scoped API keys, validated at construction.

use std::fmt;

use regex_lite::Regex;

use super::AiProvider;
use crate::error::ValidationError;

fn key_pattern(provider: AiProvider) -> &'static str {
    match provider {
        AiProvider::Cohere => r"^[a-zA-Z0-9]{40}$",
        AiProvider::OpenAi => r"^sk-[A-Za-z0-9_-]{20,}$",
        AiProvider::DeepSeek => r"^sk-[a-f0-9]{32}$",
        AiProvider::Sourcegraph => r"^sgp_[a-f0-9]{16}_[a-f0-9]{40}$",
    }
}

/// An API key known to match its provider's key format.
///
/// `Display` yields the raw key (it has to reach the provider); `Debug` does not.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    provider: AiProvider,
    value: String,
}

impl ApiKey {
    pub fn parse(provider: AiProvider, raw: &str) -> Result<Self, ValidationError> {
        let re = Regex::new(key_pattern(provider)).expect("Invalid regex");
        if !re.is_match(raw) {
            return Err(ValidationError::InvalidApiKeyFormat(provider));
        }

        Ok(Self {
            provider,
            value: raw.to_string(),
        })
    }

    pub fn provider(&self) -> AiProvider {
        self.provider
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("provider", &self.provider)
            .field("value", &"<redacted>")
            .finish()
    }
}
