//! AI provider registry.
//!
//! Every provider-specific constant (label, endpoint, model, API key variable,
//! execution strategy) is a pure function of [`AiProvider`].

use std::fmt;

use crate::error::ValidationError;

/// Shape of the JSON body returned by an HTTP chat-completion provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Cohere v2 chat: `message.content[0].text`
    CohereV2,
    /// OpenAI-compatible chat completions: `choices[0].message.content`
    OpenAi,
}

/// How a provider turns a prompt and a diff into a raw response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// POST to a chat-completion endpoint.
    Http(ResponseFormat),
    /// Pipe the diff into an external CLI.
    ExternalCli,
}

/// Supported AI providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiProvider {
    Cohere,
    OpenAi,
    DeepSeek,
    Sourcegraph,
}

impl AiProvider {
    /// All providers, in registry order.
    pub const ALL: [AiProvider; 4] = [
        AiProvider::Cohere,
        AiProvider::OpenAi,
        AiProvider::DeepSeek,
        AiProvider::Sourcegraph,
    ];

    /// Parse a provider identifier as stored in the configuration file.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidProvider(value.to_string()))
    }

    /// Identifier used in configuration keys and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::Cohere => "cohere",
            AiProvider::OpenAi => "openai",
            AiProvider::DeepSeek => "deepseek",
            AiProvider::Sourcegraph => "sourcegraph",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AiProvider::Cohere => "Cohere",
            AiProvider::OpenAi => "OpenAI",
            AiProvider::DeepSeek => "DeepSeek",
            AiProvider::Sourcegraph => "Sourcegraph",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            AiProvider::Cohere => "https://api.cohere.com/v2/chat",
            AiProvider::OpenAi => "https://api.openai.com/v1/chat/completions",
            AiProvider::DeepSeek => "https://api.deepseek.com/chat/completions",
            AiProvider::Sourcegraph => "https://sourcegraph.com",
        }
    }

    /// Model used when the configuration does not name one.
    ///
    /// Sourcegraph has none: `cody` picks its own.
    pub fn default_model(&self) -> Option<&'static str> {
        match self {
            AiProvider::Cohere => Some("command-r-plus-08-2024"),
            AiProvider::OpenAi => Some("gpt-4o-mini"),
            AiProvider::DeepSeek => Some("deepseek-chat"),
            AiProvider::Sourcegraph => None,
        }
    }

    /// Environment variable consulted when no key is stored in the configuration.
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            AiProvider::Cohere => "COHERE_API_KEY",
            AiProvider::OpenAi => "OPENAI_API_KEY",
            AiProvider::DeepSeek => "DEEPSEEK_API_KEY",
            AiProvider::Sourcegraph => "SRC_ACCESS_TOKEN",
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            AiProvider::Cohere => Strategy::Http(ResponseFormat::CohereV2),
            AiProvider::OpenAi | AiProvider::DeepSeek => Strategy::Http(ResponseFormat::OpenAi),
            AiProvider::Sourcegraph => Strategy::ExternalCli,
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
