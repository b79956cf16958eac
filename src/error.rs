//! Error types for yso-commit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{AiProvider, Language};

/// Errors from the user configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to locate home directory.")]
    HomeNotFound,

    #[error("Unable to locate user configuration directory at {}. Run `commit init` first.", .0.display())]
    DirectoryMissing(PathBuf),

    #[error("Unable to locate user configuration file at {}. Run `commit init` first.", .0.display())]
    FileMissing(PathBuf),

    #[error("User configuration file already exists at {}. Use --force to overwrite.", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Failed to create user configuration directory: {0}")]
    CreateDirFailed(#[source] std::io::Error),

    #[error("Unable to read user configuration file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Unable to write to user configuration file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Invalid user configuration file format: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Invalid user configuration file format: the root must be a JSON object.")]
    NotAnObject,

    #[error("Unable to encode user configuration data: {0}")]
    EncodeFailed(#[source] serde_json::Error),

    #[error("User configuration key '{0}' not found.")]
    KeyNotFound(String),

    #[error("User configuration key '{key}' should be {expected}.")]
    InvalidValue { key: String, expected: &'static str },
}

/// Errors from validating user input and configured values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid AI provider {0}.")]
    InvalidProvider(String),

    #[error("Invalid language {0}.")]
    InvalidLanguage(String),

    #[error("Invalid {0} API key format.")]
    InvalidApiKeyFormat(AiProvider),

    #[error("Invalid API key for \"{0}\" AI provider.")]
    MissingApiKey(AiProvider),

    #[error("The \"{0}\" AI provider is not enabled.")]
    ProviderDisabled(AiProvider),

    #[error("The \"{0}\" language is not enabled.")]
    LanguageDisabled(Language),

    #[error("No enabled AI providers found.")]
    NoEnabledProviders,
}

/// Errors from typed configuration accessors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors from AI provider backends (HTTP APIs and external CLIs).
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider} API error \"{reason}\" (status {status}).")]
    HttpStatus {
        provider: AiProvider,
        status: u16,
        reason: String,
    },

    #[error("{provider} request failed: {source}")]
    Request {
        provider: AiProvider,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} response body is missing or malformed: {detail}")]
    InvalidJson { provider: AiProvider, detail: String },

    #[error("{provider} response is missing or has an invalid `{field}` field.")]
    MalformedResponse {
        provider: AiProvider,
        field: &'static str,
    },

    #[error("{provider} returned unsupported content of type `{content_type}`.")]
    UnsupportedContent {
        provider: AiProvider,
        content_type: String,
    },

    #[error("{0} is not installed. Install it and make sure it is on your PATH.")]
    NotInstalled(String),

    #[error("Failed to spawn {binary}: {source}")]
    SpawnFailed {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{binary} exited with code {code}: {stderr}")]
    NonZeroExit {
        binary: String,
        code: i32,
        stderr: String,
    },

    #[error("Unable to generate commit message: {0} returned no output.")]
    EmptyOutput(String),

    #[error("{0} timed out after {1} seconds")]
    Timeout(String, u64),
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to retrieve the Git staged changes. {stderr}")]
    DiffFailed { stderr: String },

    #[error("No Git staged changes found.")]
    NoStagedChanges,

    #[error("{0}")]
    CommitFailed(String),

    #[error("git {0} timed out after {1} seconds")]
    Timeout(&'static str, u64),
}

/// Errors from pulling the commit message out of a model response.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Unable to extract commit message.")]
    NoFencedBlock,

    #[error("Extracted commit message is empty.")]
    Empty,
}

/// Errors from the commit message generator.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<SettingsError> for GenerateError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::Config(e) => GenerateError::Config(e),
            SettingsError::Validation(e) => GenerateError::Validation(e),
        }
    }
}

/// Errors from interactive prompts.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Unable to get the answer: {0}")]
    Interaction(#[from] dialoguer::Error),

    #[error("Unable to get the answer: no options to choose from.")]
    NoOptions,
}

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("{0}")]
    Usage(String),

    #[error("Failed to write command output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<SettingsError> for CommandError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::Config(e) => CommandError::Config(e),
            SettingsError::Validation(e) => CommandError::Validation(e),
        }
    }
}
