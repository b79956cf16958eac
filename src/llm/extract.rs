//! Pull the commit message out of a model reply.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::ExtractError;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("Invalid regex"));

/// Return the trimmed contents of the first triple-backtick block.
pub fn extract_commit_message(raw: &str) -> Result<String, ExtractError> {
    let captures = FENCED_BLOCK
        .captures(raw)
        .ok_or(ExtractError::NoFencedBlock)?;

    let message = captures.get(1).map_or("", |m| m.as_str()).trim();
    if message.is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(message.to_string())
}
