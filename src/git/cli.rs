//! Staged diff and commit via the system `git` binary.
//!
//! Shelling out inherits the user's git config, hooks and signing setup.

use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::config::env;
use crate::error::GitError;
use crate::progress::{Observer, Status, Subscriber, TICK_PERIOD, drive_with_ticks};

#[async_trait]
pub trait FetchStagedChanges: Send + Sync {
    /// Output of `git diff --staged`. Never empty on success.
    async fn fetch_staged_diff(&self) -> Result<String, GitError>;
}

#[async_trait]
pub trait CommitStagedChanges: Send + Sync {
    fn subscribe(&self, subscriber: Subscriber<Status>);

    async fn commit_staged_changes(&self, message: &str) -> Result<(), GitError>;
}

pub struct GitCli {
    workdir: Option<PathBuf>,
    observer: Observer<Status>,
    timeout: Duration,
}

impl GitCli {
    /// Run git in the current directory.
    pub fn new() -> Self {
        Self {
            workdir: None,
            observer: Observer::new(),
            timeout: env::timeout(),
        }
    }

    /// Run git in `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
            ..Self::new()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run_git(&self, args: &[&str], operation: &'static str) -> Result<Output, GitError> {
        let mut cmd = Command::new("git");
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        debug!("Running git {}", operation);
        timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| GitError::Timeout(operation, self.timeout.as_secs()))?
            .map_err(|source| GitError::SpawnFailed { operation, source })
    }

    async fn commit(&self, message: &str) -> Result<(), GitError> {
        let observer = &self.observer;
        let output = drive_with_ticks(
            self.run_git(&["commit", "-m", message], "commit"),
            TICK_PERIOD,
            || observer.notify(&Status::Running),
        )
        .await?;

        if !output.status.success() {
            // "nothing to commit" and friends are reported on stdout.
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(GitError::CommitFailed(detail));
        }

        Ok(())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchStagedChanges for GitCli {
    async fn fetch_staged_diff(&self) -> Result<String, GitError> {
        let output = self.run_git(&["diff", "--staged"], "diff").await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::DiffFailed { stderr });
        }

        let diff = String::from_utf8_lossy(&output.stdout).to_string();
        if diff.trim().is_empty() {
            return Err(GitError::NoStagedChanges);
        }

        Ok(diff)
    }
}

#[async_trait]
impl CommitStagedChanges for GitCli {
    fn subscribe(&self, subscriber: Subscriber<Status>) {
        self.observer.subscribe(subscriber);
    }

    async fn commit_staged_changes(&self, message: &str) -> Result<(), GitError> {
        self.observer.notify(&Status::Started);

        let result = self.commit(message).await;
        let status = if result.is_ok() {
            Status::Finished
        } else {
            Status::Failed
        };
        self.observer.notify(&status);

        result
    }
}
