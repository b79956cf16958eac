//! HTTP chat-completion backend (Cohere v2 and OpenAI-compatible APIs).

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::backend::ProviderBackend;
use crate::domain::{AiProvider, ApiKey, ResponseFormat};
use crate::error::ProviderError;

const TEMPERATURE: f64 = 0.2;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
}

pub struct ChatCompletionBackend {
    client: reqwest::Client,
    provider: AiProvider,
    format: ResponseFormat,
    endpoint: String,
    api_key: ApiKey,
    model: Option<String>,
}

impl ChatCompletionBackend {
    pub fn new(
        provider: AiProvider,
        format: ResponseFormat,
        api_key: ApiKey,
        model: Option<String>,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("yso-commit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ProviderError::Request { provider, source })?;

        Ok(Self {
            client,
            provider,
            format,
            endpoint: provider.endpoint().to_string(),
            api_key,
            model,
        })
    }

    /// Point the backend at another URL (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProviderBackend for ChatCompletionBackend {
    async fn complete(&self, prompt: &str, diff: &str) -> Result<String, ProviderError> {
        let provider = self.provider;
        let body = ChatRequest {
            model: self.model.as_deref(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt,
                },
                ChatMessage {
                    role: "user",
                    content: diff,
                },
            ],
            temperature: TEMPERATURE,
        };

        debug!("POST {} ({})", self.endpoint, provider);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.as_str())
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|source| ProviderError::Request { provider, source })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| ProviderError::Request { provider, source })?;

        if status != StatusCode::OK {
            return Err(ProviderError::HttpStatus {
                provider,
                status: status.as_u16(),
                reason: status_reason(self.format, status, &text),
            });
        }

        let json: Value = serde_json::from_str(&text).map_err(|e| ProviderError::InvalidJson {
            provider,
            detail: e.to_string(),
        })?;

        match self.format {
            ResponseFormat::CohereV2 => parse_cohere_response(provider, &json),
            ResponseFormat::OpenAi => parse_openai_response(provider, &json),
        }
    }
}

/// Cohere documents a reason for each v2 chat error status.
fn cohere_status_reason(status: u16) -> Option<&'static str> {
    let reason = match status {
        400 => "V2chat Request Bad Request Error",
        401 => "V2chat Request Unauthorized Error",
        403 => "V2chat Request Forbidden Error",
        404 => "V2chat Request Not Found Error",
        422 => "V2chat Request Unprocessable Entity Error",
        429 => "V2chat Request Too Many Requests Error",
        498 => "V2chat Request Invalid Token Error",
        499 => "V2chat Request Client Closed Request Error",
        500 => "V2chat Request Internal Server Error",
        501 => "V2chat Request Not Implemented Error",
        503 => "V2chat Request Service Unavailable Error",
        504 => "V2chat Request Gateway Timeout Error",
        _ => return None,
    };
    Some(reason)
}

fn status_reason(format: ResponseFormat, status: StatusCode, body: &str) -> String {
    if format == ResponseFormat::CohereV2
        && let Some(reason) = cohere_status_reason(status.as_u16())
    {
        return reason.to_string();
    }

    // OpenAI-compatible APIs put a readable message in `error.message`.
    if let Ok(json) = serde_json::from_str::<Value>(body)
        && let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
    {
        return message.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unexpected status")
        .to_string()
}

/// Extract `message.content[0].text` from a Cohere v2 chat response.
pub(crate) fn parse_cohere_response(
    provider: AiProvider,
    json: &Value,
) -> Result<String, ProviderError> {
    let malformed = |field| ProviderError::MalformedResponse { provider, field };

    let content = json
        .get("message")
        .filter(|m| m.is_object())
        .ok_or_else(|| malformed("message"))?
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("message.content"))?
        .first()
        .filter(|c| c.is_object())
        .ok_or_else(|| malformed("message.content[0]"))?;

    let kind = content
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("message.content[0].type"))?;
    if kind != "text" {
        return Err(ProviderError::UnsupportedContent {
            provider,
            content_type: kind.to_string(),
        });
    }

    content
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed("message.content[0].text"))
}

/// Extract `choices[0].message.content` from an OpenAI-compatible response.
pub(crate) fn parse_openai_response(
    provider: AiProvider,
    json: &Value,
) -> Result<String, ProviderError> {
    let malformed = |field| ProviderError::MalformedResponse { provider, field };

    json.get("choices")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("choices"))?
        .first()
        .filter(|c| c.is_object())
        .ok_or_else(|| malformed("choices[0]"))?
        .get("message")
        .filter(|m| m.is_object())
        .ok_or_else(|| malformed("choices[0].message"))?
        .get("content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed("choices[0].message.content"))
}
