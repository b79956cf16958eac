//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;

use yso_commit::commands::Prompter;
use yso_commit::config::{ConfigPaths, ConfigStore, Settings, create_configuration_file};
use yso_commit::progress::{Status, Subscriber};
use yso_commit::{
    AiProvider, CommitStagedChanges, FetchStagedChanges, GenerateCommitMessage, GenerateError,
    GitError, PromptError, ProviderError,
};

/// A Sourcegraph access token that matches the expected key format.
pub const SOURCEGRAPH_KEY: &str = "sgp_deadbeefcafebabe_ffffffffffffffffffffffffffffffffffffffff";

/// Staged diff renaming a PHP function, used by the end-to-end tests.
pub const RENAME_DIFF: &str = r#"diff --git a/Example.php b/Example.php
index 3b18e51..a9c2f2b 100644
--- a/Example.php
+++ b/Example.php
@@ -1,7 +1,7 @@
 <?php

 class Example
 {
-    public function helloWorld(): string
+    public function helloYsoCode(): string
     {
         return 'Hello World';
     }
"#;

/// Collect a command's output buffer as a string.
pub fn output_of(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("command output is UTF-8")
}

// ============================================
// Configuration
// ============================================

/// A user configuration initialised from the stub in a temporary home.
pub struct TestConfig {
    pub home: TempDir,
    pub paths: ConfigPaths,
    pub settings: Settings,
}

impl TestConfig {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("Failed to create temp directory");
        let paths = ConfigPaths::under(home.path());
        create_configuration_file(&paths, false).expect("Failed to write config stub");
        let settings = Settings::new(ConfigStore::new(paths.clone()));
        Self {
            home,
            paths,
            settings,
        }
    }

    /// Paths in an empty home, without a configuration file.
    pub fn uninitialised() -> (TempDir, ConfigPaths) {
        let home = tempfile::tempdir().expect("Failed to create temp directory");
        let paths = ConfigPaths::under(home.path());
        (home, paths)
    }

    pub fn set(&self, key: &str, value: Value) {
        self.settings
            .store()
            .set_value(key, value)
            .unwrap_or_else(|e| panic!("Failed to set {}: {}", key, e));
    }

    pub fn get(&self, key: &str) -> Value {
        self.settings
            .store()
            .get_value(key)
            .unwrap_or_else(|e| panic!("Failed to get {}: {}", key, e))
    }

    pub fn raw(&self) -> String {
        std::fs::read_to_string(self.paths.file()).expect("Failed to read config file")
    }
}

// ============================================
// Fakes for command collaborators
// ============================================

/// Generator returning a canned reply, recording its calls.
pub struct FakeGenerator {
    reply: Result<String, String>,
    pub generate_calls: AtomicU32,
    pub subscribe_calls: AtomicU32,
    pub last_call: Mutex<Option<(AiProvider, String, String)>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Self {
        Self::with_reply(Ok(reply.to_string()))
    }

    pub fn failing(binary: &str) -> Self {
        Self::with_reply(Err(binary.to_string()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            generate_calls: AtomicU32::new(0),
            subscribe_calls: AtomicU32::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> u32 {
        self.generate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerateCommitMessage for FakeGenerator {
    fn subscribe(&self, _subscriber: Subscriber<Status>) {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
    }

    async fn generate(
        &self,
        provider: AiProvider,
        prompt: &str,
        diff: &str,
    ) -> Result<String, GenerateError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((provider, prompt.to_string(), diff.to_string()));

        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(binary) => Err(ProviderError::EmptyOutput(binary.clone()).into()),
        }
    }
}

/// Git stand-in with a fixed staged diff and a commit log.
pub struct FakeGit {
    staged: Option<String>,
    commit_error: Option<String>,
    pub fetch_calls: AtomicU32,
    pub committed: Mutex<Vec<String>>,
}

impl FakeGit {
    pub fn with_staged(diff: &str) -> Self {
        Self {
            staged: Some(diff.to_string()),
            commit_error: None,
            fetch_calls: AtomicU32::new(0),
            committed: Mutex::new(Vec::new()),
        }
    }

    /// Nothing staged: fetching reports "No Git staged changes found."
    pub fn empty() -> Self {
        Self {
            staged: None,
            ..Self::with_staged("")
        }
    }

    pub fn failing_commit(mut self, stderr: &str) -> Self {
        self.commit_error = Some(stderr.to_string());
        self
    }

    pub fn fetches(&self) -> u32 {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn commits(&self) -> Vec<String> {
        self.committed.lock().unwrap().clone()
    }
}

#[async_trait]
impl FetchStagedChanges for FakeGit {
    async fn fetch_staged_diff(&self) -> Result<String, GitError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.staged.clone().ok_or(GitError::NoStagedChanges)
    }
}

#[async_trait]
impl CommitStagedChanges for FakeGit {
    fn subscribe(&self, _subscriber: Subscriber<Status>) {}

    async fn commit_staged_changes(&self, message: &str) -> Result<(), GitError> {
        if let Some(stderr) = &self.commit_error {
            return Err(GitError::CommitFailed(stderr.clone()));
        }
        self.committed.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Prompter with preset answers.
pub struct ScriptedPrompter {
    confirm_answer: bool,
    select_answer: usize,
    pub confirm_calls: AtomicU32,
    pub select_calls: AtomicU32,
    pub offered: Mutex<Vec<String>>,
    pub offered_default: Mutex<Option<usize>>,
}

impl ScriptedPrompter {
    pub fn answering(confirm: bool) -> Self {
        Self::new(confirm, 0)
    }

    pub fn selecting(index: usize) -> Self {
        Self::new(true, index)
    }

    fn new(confirm_answer: bool, select_answer: usize) -> Self {
        Self {
            confirm_answer,
            select_answer,
            confirm_calls: AtomicU32::new(0),
            select_calls: AtomicU32::new(0),
            offered: Mutex::new(Vec::new()),
            offered_default: Mutex::new(None),
        }
    }

    pub fn confirms(&self) -> u32 {
        self.confirm_calls.load(Ordering::SeqCst)
    }

    pub fn selects(&self) -> u32 {
        self.select_calls.load(Ordering::SeqCst)
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool, PromptError> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.confirm_answer)
    }

    fn select(&self, _prompt: &str, items: &[String], default: usize) -> Result<usize, PromptError> {
        self.select_calls.fetch_add(1, Ordering::SeqCst);
        *self.offered.lock().unwrap() = items.to_vec();
        *self.offered_default.lock().unwrap() = Some(default);
        Ok(self.select_answer)
    }
}

// ============================================
// Real git repositories
// ============================================

/// A git repository in a temp directory, driven through the git CLI.
pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and stage it.
    pub fn stage(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("Failed to write file");
        self.git(&["add", name]);
    }

    /// Run git in the repository and return trimmed stdout.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
