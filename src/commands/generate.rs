//! `commit generate`: write a commit message for the staged diff and
//! optionally commit it.

use std::io::Write;

use tracing::debug;

use super::prompter::Prompter;
use super::{resolve_provider, success};
use crate::config::Settings;
use crate::domain::Language;
use crate::error::CommandError;
use crate::git::{CommitStagedChanges, FetchStagedChanges};
use crate::llm::{GenerateCommitMessage, build_system_prompt, extract_commit_message};
use crate::progress::ProgressIndicator;

const CONFIRM_PROMPT: &str = "Do you want to create a commit with this message?";

#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Diff to describe instead of the staged changes.
    pub diff: Option<String>,
    pub provider: Option<String>,
    pub lang: Option<String>,
}

pub async fn generate(
    args: &GenerateArgs,
    settings: &Settings,
    generator: &dyn GenerateCommitMessage,
    git: &dyn FetchStagedChanges,
    committer: &dyn CommitStagedChanges,
    prompter: &dyn Prompter,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let provider = resolve_provider(settings, args.provider.as_deref())?;
    let language = resolve_language(settings, args.lang.as_deref())?;

    let diff = match args.diff.as_deref() {
        Some(diff) if !diff.trim().is_empty() => diff.to_string(),
        _ => git.fetch_staged_diff().await?,
    };
    debug!("Diff is {} bytes", diff.len());

    let prompt = build_system_prompt(language);
    generator.subscribe(ProgressIndicator::new(provider.display_name()).into_subscriber());
    let raw = generator.generate(provider, &prompt, &diff).await?;
    let message = extract_commit_message(&raw)?;

    writeln!(
        out,
        "Below is the generated commit message [AI: {} | Lang: {}]:",
        provider, language
    )?;
    writeln!(out)?;
    writeln!(out, "{}", message)?;
    writeln!(out)?;

    if !prompter.confirm(CONFIRM_PROMPT, true)? {
        return success(out, "No commit made.");
    }

    committer.subscribe(ProgressIndicator::new("Git").into_subscriber());
    committer.commit_staged_changes(&message).await?;

    success(out, "Commit created successfully!")
}

fn resolve_language(settings: &Settings, flag: Option<&str>) -> Result<Language, CommandError> {
    match flag {
        Some(value) => {
            let language = Language::parse(value)?;
            settings.ensure_language_enabled(language)?;
            Ok(language)
        }
        None => Ok(settings.default_language()?),
    }
}
