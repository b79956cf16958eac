//! Commit message generation with progress notifications.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::debug;

use super::backend::{BackendFactory, DefaultBackendFactory};
use crate::config::Settings;
use crate::config::env;
use crate::domain::AiProvider;
use crate::error::{GenerateError, ProviderError};
use crate::progress::{Observer, Status, Subscriber, TICK_PERIOD, drive_with_ticks};

/// Produces the raw model reply for a diff.
#[async_trait]
pub trait GenerateCommitMessage: Send + Sync {
    /// Receive [`Status`] events for every subsequent `generate` call.
    fn subscribe(&self, subscriber: Subscriber<Status>);

    async fn generate(
        &self,
        provider: AiProvider,
        prompt: &str,
        diff: &str,
    ) -> Result<String, GenerateError>;
}

/// Resolves credentials from [`Settings`] and calls the provider's backend.
///
/// Emits `Started`, then `Running` every tick while waiting, then exactly one
/// of `Failed` or `Finished`.
pub struct AiCommitMessageGenerator<F = DefaultBackendFactory> {
    settings: Settings,
    factory: F,
    observer: Observer<Status>,
    timeout: Duration,
}

impl AiCommitMessageGenerator {
    pub fn new(settings: Settings) -> Self {
        Self::with_factory(settings, DefaultBackendFactory)
    }
}

impl<F: BackendFactory> AiCommitMessageGenerator<F> {
    pub fn with_factory(settings: Settings, factory: F) -> Self {
        Self {
            settings,
            factory,
            observer: Observer::new(),
            timeout: env::timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn request(
        &self,
        provider: AiProvider,
        prompt: &str,
        diff: &str,
    ) -> Result<String, GenerateError> {
        self.settings.ensure_provider_enabled(provider)?;
        let api_key = self.settings.api_key(provider)?;
        let model = self.settings.default_model(provider)?;

        debug!(
            "Generating commit message with {} (model: {})",
            provider,
            model.as_deref().unwrap_or("provider default")
        );
        let backend = self.factory.build(provider, api_key, model)?;

        let secs = self.timeout.as_secs();
        let call = timeout(self.timeout, backend.complete(prompt, diff));
        let observer = &self.observer;
        let raw = drive_with_ticks(call, TICK_PERIOD, || observer.notify(&Status::Running))
            .await
            .map_err(|_| ProviderError::Timeout(provider.display_name().to_string(), secs))??;

        Ok(raw)
    }
}

#[async_trait]
impl<F: BackendFactory> GenerateCommitMessage for AiCommitMessageGenerator<F> {
    fn subscribe(&self, subscriber: Subscriber<Status>) {
        self.observer.subscribe(subscriber);
    }

    async fn generate(
        &self,
        provider: AiProvider,
        prompt: &str,
        diff: &str,
    ) -> Result<String, GenerateError> {
        self.observer.notify(&Status::Started);

        let result = self.request(provider, prompt, diff).await;
        match &result {
            Ok(_) => self.observer.notify(&Status::Finished),
            Err(e) => {
                debug!("Commit message generation failed: {}", e);
                self.observer.notify(&Status::Failed);
            }
        }

        result
    }
}
