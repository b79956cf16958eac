//! Sourcegraph backend: pipes the diff into the `cody` CLI.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::backend::ProviderBackend;
use crate::domain::{AiProvider, ApiKey};
use crate::error::ProviderError;

/// Name of the Sourcegraph CLI binary.
pub const CODY_BINARY: &str = "cody";

const ENDPOINT_ENV_VAR: &str = "SRC_ENDPOINT";
const TOKEN_ENV_VAR: &str = "SRC_ACCESS_TOKEN";

pub struct CodyBackend {
    binary: String,
    endpoint: String,
    api_key: ApiKey,
    model: Option<String>,
}

impl CodyBackend {
    pub fn new(api_key: ApiKey, model: Option<String>) -> Self {
        Self {
            binary: CODY_BINARY.to_string(),
            endpoint: AiProvider::Sourcegraph.endpoint().to_string(),
            api_key,
            model,
        }
    }

    /// Run another executable in place of `cody` (a name on PATH or a path).
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn command(&self, prompt: &str) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("chat").arg("--stdin").arg("-m").arg(prompt);
        if let Some(model) = &self.model {
            cmd.arg("--model").arg(model);
        }
        cmd.env(ENDPOINT_ENV_VAR, &self.endpoint)
            .env(TOKEN_ENV_VAR, self.api_key.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl ProviderBackend for CodyBackend {
    async fn complete(&self, prompt: &str, diff: &str) -> Result<String, ProviderError> {
        if which::which(&self.binary).is_err() {
            return Err(ProviderError::NotInstalled(self.binary.clone()));
        }

        let spawn_failed = |source| ProviderError::SpawnFailed {
            binary: self.binary.clone(),
            source,
        };

        debug!("Running {} chat --stdin", self.binary);
        let mut child = self.command(prompt).spawn().map_err(spawn_failed)?;

        // Feed stdin while collecting output so a large diff cannot deadlock
        // against a full stdout pipe.
        let mut stdin = child.stdin.take();
        let feed = async move {
            if let Some(stdin) = stdin.as_mut() {
                let result = stdin.write_all(diff.as_bytes()).await;
                if let Err(e) = result {
                    debug!("Failed to write diff to {} stdin: {}", CODY_BINARY, e);
                }
            }
            drop(stdin);
        };
        let ((), output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(spawn_failed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);
            return Err(ProviderError::NonZeroExit {
                binary: self.binary.clone(),
                code,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if stdout.trim().is_empty() {
            return Err(ProviderError::EmptyOutput(self.binary.clone()));
        }

        Ok(stdout)
    }
}
