//! Core value types: providers, languages and API keys.

pub mod api_key;
pub mod language;
pub mod provider;

pub use api_key::ApiKey;
pub use language::Language;
pub use provider::{AiProvider, ResponseFormat, Strategy};
