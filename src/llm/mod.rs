//! Commit message generation: provider backends, prompt, and extraction.

pub mod backend;
pub mod cody;
pub mod extract;
pub mod generator;
pub mod http;
pub mod prompt;

pub use backend::{BackendFactory, DefaultBackendFactory, ProviderBackend};
pub use cody::CodyBackend;
pub use extract::extract_commit_message;
pub use generator::{AiCommitMessageGenerator, GenerateCommitMessage};
pub use http::ChatCompletionBackend;
pub use prompt::build_system_prompt;
