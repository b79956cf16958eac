//! CLI command handlers.
//!
//! Handlers take their collaborators as parameters and write to an injected
//! writer, so the binary only wires real implementations together.

use std::io::Write;
use std::process::ExitCode;

use crate::config::Settings;
use crate::domain::AiProvider;
use crate::error::CommandError;

pub mod api_key;
pub mod generate;
pub mod init;
pub mod prompter;
pub mod provider;

pub use api_key::{ApiKeyArgs, api_key};
pub use generate::{GenerateArgs, generate};
pub use init::init;
pub use prompter::{DialoguerPrompter, Prompter};
pub use provider::{ProviderArgs, provider};

/// Result of running a command, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        outcome.exit_code()
    }
}

/// Report a command error as `Error: <message>` and map to an [`Outcome`].
pub fn finish(result: Result<(), CommandError>, out: &mut impl Write) -> Outcome {
    match result {
        Ok(()) => Outcome::Success,
        Err(e) => {
            // Nothing more to do if the writer itself is broken.
            let _ = writeln!(out, "Error: {}", e);
            Outcome::Failure
        }
    }
}

pub(crate) fn success(out: &mut impl Write, message: &str) -> Result<(), CommandError> {
    writeln!(out, "Success: {}", message)?;
    Ok(())
}

/// Provider from a `--provider` value (must be enabled), else the default.
pub(crate) fn resolve_provider(
    settings: &Settings,
    flag: Option<&str>,
) -> Result<AiProvider, CommandError> {
    match flag {
        Some(value) => {
            let provider = AiProvider::parse(value)?;
            settings.ensure_provider_enabled(provider)?;
            Ok(provider)
        }
        None => Ok(settings.default_provider()?),
    }
}
