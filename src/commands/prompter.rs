//! Interactive questions, behind a trait so commands can be scripted in tests.

use dialoguer::{Confirm, Select};

use crate::error::PromptError;

pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError>;

    /// Pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, PromptError>;
}

/// Terminal prompts via `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, PromptError> {
        if items.is_empty() {
            return Err(PromptError::NoOptions);
        }

        let index = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default.min(items.len() - 1))
            .interact()?;
        Ok(index)
    }
}
