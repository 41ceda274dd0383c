//! Judge Credentials
//!
//! Resolution and validation of the judging provider API key.
//!
//! The key is resolved exactly once at session startup through an explicit
//! precedence chain: a key supplied directly by the caller, then the
//! settings file, then the `GROQ_API_KEY` environment variable. If none
//! resolves the session refuses to start.

use super::Settings;
use std::fmt;
use thiserror::Error;

const ENV_VAR: &str = "GROQ_API_KEY";

// Groq keys are ~56 chars; allow some margin.
const MIN_API_KEY_LENGTH: usize = 20;
const MAX_API_KEY_LENGTH: usize = 100;

/// Errors raised at session startup when configuration cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no judging API key found: pass one explicitly, set it in settings.toml, or export {ENV_VAR}")]
    MissingCredential,

    #[error("invalid API key: {0}")]
    InvalidCredential(String),
}

/// A resolved, validated judging provider credential
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Resolve the credential through the precedence chain:
    /// explicit input > settings file > environment variable.
    pub fn resolve(explicit: Option<&str>, settings: &Settings) -> Result<Self, ConfigError> {
        Self::resolve_from(
            explicit,
            settings.judge.api_key.as_deref(),
            std::env::var(ENV_VAR).ok().as_deref(),
        )
    }

    fn resolve_from(
        explicit: Option<&str>,
        from_settings: Option<&str>,
        from_env: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let candidate = [explicit, from_settings, from_env]
            .into_iter()
            .flatten()
            .find(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingCredential)?;

        Self::validate(candidate)?;
        Ok(Self(candidate.trim().to_string()))
    }

    /// Validate key format: Groq keys start with `gsk_` and contain only
    /// alphanumerics and underscores.
    pub fn validate(api_key: &str) -> Result<(), ConfigError> {
        let api_key = api_key.trim();

        if api_key.is_empty() {
            return Err(ConfigError::InvalidCredential(
                "API key cannot be empty".to_string(),
            ));
        }

        if api_key.len() > MAX_API_KEY_LENGTH {
            return Err(ConfigError::InvalidCredential(format!(
                "API key is too long (max {} characters)",
                MAX_API_KEY_LENGTH
            )));
        }

        if !api_key.starts_with("gsk_") {
            return Err(ConfigError::InvalidCredential(
                "API key must start with 'gsk_'".to_string(),
            ));
        }

        if api_key.len() < MIN_API_KEY_LENGTH {
            return Err(ConfigError::InvalidCredential(
                "API key is too short".to_string(),
            ));
        }

        if !api_key.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(ConfigError::InvalidCredential(
                "API key contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    /// The raw key, for request authentication only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Keep the key out of logs and error chains.
impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiCredential(gsk_****)")
    }
}
