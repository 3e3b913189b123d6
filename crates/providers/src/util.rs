//! Shared utility functions for provider adapters.

use nf_domain::config::LlmConfig;
use nf_domain::error::{Error, Result};

/// Convert a [`reqwest::Error`] into the domain [`Error`] type.
///
/// Timeout errors map to [`Error::Timeout`]; everything else maps to
/// [`Error::Http`].
pub(crate) fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}

/// Resolve the API key from the LLM config.
///
/// Precedence:
/// 1. `api_key` field (plaintext, warns)
/// 2. `api_key_env` field (reads environment variable)
/// 3. Error
pub fn resolve_api_key(cfg: &LlmConfig) -> Result<String> {
    if let Some(ref key) = cfg.api_key {
        tracing::warn!(
            "API key loaded from plaintext config field 'api_key'; \
             prefer 'api_key_env' instead"
        );
        return Ok(key.clone());
    }

    if let Some(ref env_var) = cfg.api_key_env {
        return std::env::var(env_var).map_err(|_| {
            Error::Auth(format!(
                "environment variable '{env_var}' not set or not valid UTF-8"
            ))
        });
    }

    Err(Error::Auth(
        "no API key configured: set 'api_key' or 'api_key_env' in [llm]".into(),
    ))
}
