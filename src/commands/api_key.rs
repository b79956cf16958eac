//! `commit ai:api-key`: show, set or remove a provider's API key.

use std::io::Write;

use super::{resolve_provider, success};
use crate::config::Settings;
use crate::domain::ApiKey;
use crate::error::{CommandError, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct ApiKeyArgs {
    pub key: Option<String>,
    pub provider: Option<String>,
    pub get: bool,
    pub remove: bool,
}

pub fn api_key(
    args: &ApiKeyArgs,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if args.get && args.remove {
        return Err(CommandError::Usage(
            "The --get and --remove options cannot be used together.".to_string(),
        ));
    }
    if args.key.is_some() && (args.get || args.remove) {
        return Err(CommandError::Usage(
            "An API key cannot be combined with --get or --remove.".to_string(),
        ));
    }
    if args.key.is_none() && !args.get && !args.remove {
        return Err(CommandError::Usage(
            "No API key provided. Pass a key, --get or --remove.".to_string(),
        ));
    }

    let provider = resolve_provider(settings, args.provider.as_deref())?;

    if args.get {
        // Echoing the key back is the point of --get.
        let stored = settings
            .stored_api_key(provider)?
            .ok_or(ValidationError::MissingApiKey(provider))?;
        return success(out, &format!("Your {} API key is: {}", provider, stored));
    }

    if args.remove {
        settings.remove_api_key(provider)?;
        return success(out, "API key removed successfully!");
    }

    let raw = args.key.as_deref().unwrap_or_default().trim();
    let key = ApiKey::parse(provider, raw)?;
    settings.set_api_key(&key)?;
    success(out, "API key set successfully!")
}
