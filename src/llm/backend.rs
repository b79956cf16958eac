//! Provider backend seam and the factory that picks one per provider.

use async_trait::async_trait;

use super::cody::CodyBackend;
use super::http::ChatCompletionBackend;
use crate::domain::{AiProvider, ApiKey, Strategy};
use crate::error::ProviderError;

/// Turns a system prompt plus a staged diff into the model's raw reply.
///
/// This abstraction allows mocking HTTP and subprocess providers in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderBackend: Send + Sync {
    async fn complete(&self, prompt: &str, diff: &str) -> Result<String, ProviderError>;
}

/// Builds the backend for a provider from its credentials.
#[cfg_attr(test, mockall::automock)]
pub trait BackendFactory: Send + Sync {
    fn build(
        &self,
        provider: AiProvider,
        api_key: ApiKey,
        model: Option<String>,
    ) -> Result<Box<dyn ProviderBackend>, ProviderError>;
}

/// Factory for the real HTTP and `cody` backends.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBackendFactory;

impl BackendFactory for DefaultBackendFactory {
    fn build(
        &self,
        provider: AiProvider,
        api_key: ApiKey,
        model: Option<String>,
    ) -> Result<Box<dyn ProviderBackend>, ProviderError> {
        match provider.strategy() {
            Strategy::Http(format) => Ok(Box::new(ChatCompletionBackend::new(
                provider, format, api_key, model,
            )?)),
            Strategy::ExternalCli => Ok(Box::new(CodyBackend::new(api_key, model))),
        }
    }
}
