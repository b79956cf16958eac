//! Runtime knobs read from the environment.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default timeout for provider calls and git commits (5 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment variable to override the default timeout.
pub const TIMEOUT_ENV_VAR: &str = "YSO_COMMIT_TIMEOUT";

/// Get the configured timeout duration.
///
/// Reads `YSO_COMMIT_TIMEOUT` (seconds) if set, otherwise 300 seconds.
/// Invalid values are logged and ignored.
pub fn timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => match v.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_default() {
        temp_env::with_var_unset(TIMEOUT_ENV_VAR, || {
            assert_eq!(timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        });
    }

    #[test]
    fn test_timeout_from_env() {
        temp_env::with_var(TIMEOUT_ENV_VAR, Some("45"), || {
            assert_eq!(timeout(), Duration::from_secs(45));
        });
    }

    #[test]
    fn test_timeout_invalid_values_use_default() {
        for value in ["soon", "-5", "0", ""] {
            temp_env::with_var(TIMEOUT_ENV_VAR, Some(value), || {
                assert_eq!(timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
            });
        }
    }
}
