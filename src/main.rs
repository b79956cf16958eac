//! commit - CLI entry point.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use yso_commit::commands::{
    self, ApiKeyArgs, DialoguerPrompter, GenerateArgs, Outcome, ProviderArgs, finish,
};
use yso_commit::config::{ConfigPaths, ConfigStore, Settings};
use yso_commit::git::GitCli;
use yso_commit::llm::AiCommitMessageGenerator;

/// Write Conventional Commits messages for your staged changes with AI.
#[derive(Parser, Debug)]
#[command(name = "commit")]
#[command(about = "Write Conventional Commits messages for your staged changes with AI")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a commit message for the staged changes
    Generate {
        /// Diff to describe instead of `git diff --staged`
        diff: Option<String>,

        /// AI provider to use (cohere, openai, deepseek, sourcegraph)
        #[arg(short, long)]
        provider: Option<String>,

        /// Language of the commit message (en_US, pt_BR, es_ES)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Create the user configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Show, list or set the default AI provider
    #[command(name = "ai:provider")]
    AiProvider {
        /// Provider to set as default (prompts when omitted)
        provider: Option<String>,

        /// Print the current default provider
        #[arg(short, long)]
        get: bool,

        /// List every provider and whether it is enabled
        #[arg(short, long)]
        list: bool,
    },

    /// Show, set or remove an AI provider API key
    #[command(name = "ai:api-key")]
    AiApiKey {
        /// API key to store
        key: Option<String>,

        /// AI provider the key belongs to (defaults to the default provider)
        #[arg(short, long)]
        provider: Option<String>,

        /// Print the stored key
        #[arg(short, long)]
        get: bool,

        /// Remove the stored key
        #[arg(short, long)]
        remove: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug for this crate with --verbose.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,yso_commit=debug,commit=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<Outcome> {
    let paths = ConfigPaths::from_home().context("Unable to locate the user configuration")?;
    let settings = Settings::new(ConfigStore::new(paths.clone()));
    let mut out = io::stdout();

    let result = match cli.command {
        Command::Generate {
            diff,
            provider,
            lang,
        } => {
            let args = GenerateArgs {
                diff,
                provider,
                lang,
            };
            let generator = AiCommitMessageGenerator::new(settings.clone());
            let git = GitCli::new();
            commands::generate(
                &args,
                &settings,
                &generator,
                &git,
                &git,
                &DialoguerPrompter,
                &mut out,
            )
            .await
        }
        Command::Init { force } => commands::init(&paths, force, &mut out),
        Command::AiProvider {
            provider,
            get,
            list,
        } => {
            let args = ProviderArgs {
                provider,
                get,
                list,
            };
            commands::provider(&args, &settings, &DialoguerPrompter, &mut out)
        }
        Command::AiApiKey {
            key,
            provider,
            get,
            remove,
        } => {
            let args = ApiKeyArgs {
                key,
                provider,
                get,
                remove,
            };
            commands::api_key(&args, &settings, &mut out)
        }
    };

    Ok(finish(result, &mut out))
}
