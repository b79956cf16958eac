//! yso-commit - A CLI tool that writes Conventional Commits messages for staged changes.
//!
//! # Overview
//!
//! yso-commit sends the staged git diff to an AI provider (Cohere, OpenAI,
//! DeepSeek, or Sourcegraph's `cody` CLI), extracts the commit message from the
//! reply, and commits it once the user confirms. Provider, language and API
//! keys live in a JSON file at `~/.ysocode/commit/config.json`.

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod llm;
pub mod progress;

// Re-export commonly used types
pub use commands::Outcome;
pub use config::{ConfigPaths, ConfigStore, Settings};
pub use domain::{AiProvider, ApiKey, Language};
pub use error::{
    CommandError, ConfigError, ExtractError, GenerateError, GitError, PromptError, ProviderError,
    SettingsError, ValidationError,
};
pub use git::{CommitStagedChanges, FetchStagedChanges, GitCli};
pub use llm::{AiCommitMessageGenerator, GenerateCommitMessage};
pub use progress::{Observer, Status};
