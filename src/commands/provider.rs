//! `commit ai:provider`: show, list or change the default AI provider.

use std::io::Write;

use super::prompter::Prompter;
use super::success;
use crate::config::Settings;
use crate::domain::AiProvider;
use crate::error::CommandError;

#[derive(Debug, Clone, Default)]
pub struct ProviderArgs {
    pub provider: Option<String>,
    pub get: bool,
    pub list: bool,
}

pub fn provider(
    args: &ProviderArgs,
    settings: &Settings,
    prompter: &dyn Prompter,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if args.get && (args.provider.is_some() || args.list) {
        return Err(CommandError::Usage(
            "The --get option cannot be combined with a provider or --list.".to_string(),
        ));
    }
    if args.list && args.provider.is_some() {
        return Err(CommandError::Usage(
            "The --list option cannot be combined with a provider.".to_string(),
        ));
    }

    if args.get {
        let current = settings.default_provider()?;
        return success(out, &format!("The current default AI provider is: {}", current));
    }

    if args.list {
        return list(settings, out);
    }

    let selected = match args.provider.as_deref() {
        Some(value) => AiProvider::parse(value)?,
        None => choose(settings, prompter)?,
    };

    settings.set_default_provider(selected)?;
    success(
        out,
        &format!("The default AI provider has been set to: {}", selected),
    )
}

fn list(settings: &Settings, out: &mut impl Write) -> Result<(), CommandError> {
    let current = settings.default_provider().ok();

    writeln!(out, "Available AI providers:")?;
    for provider in AiProvider::ALL {
        let marker = if settings.is_provider_enabled(provider)? {
            "enabled"
        } else {
            "disabled"
        };
        let default = if current == Some(provider) {
            " (default)"
        } else {
            ""
        };
        writeln!(
            out,
            "  {:<12} {:<12} [{}]{}",
            provider.as_str(),
            provider.display_name(),
            marker,
            default
        )?;
    }

    Ok(())
}

fn choose(settings: &Settings, prompter: &dyn Prompter) -> Result<AiProvider, CommandError> {
    let enabled = settings.enabled_providers()?;
    let labels: Vec<String> = enabled.iter().map(|p| p.display_name().to_string()).collect();
    let default = settings
        .default_provider()
        .ok()
        .and_then(|current| enabled.iter().position(|p| *p == current))
        .unwrap_or(0);

    let index = prompter.select("Select the default AI provider", &labels, default)?;
    enabled
        .get(index)
        .copied()
        .ok_or_else(|| CommandError::Usage("Invalid AI provider selection.".to_string()))
}
