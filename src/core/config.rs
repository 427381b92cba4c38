//! Startup configuration read from the process environment.
//!
//! Nothing is persisted. The access token is read once and injected into
//! the remote client; every other key has a default.

use crate::error::{Error, Result};

pub const TOKEN_VAR: &str = "ASANA_ACCESS_TOKEN";
pub const LEGACY_TOKEN_VAR: &str = "asana_key";
pub const BASE_URL_VAR: &str = "ASANA_BASE_URL";
pub const LOG_VAR: &str = "TASKMAN_LOG";

pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";
pub const DEFAULT_LOG_SPEC: &str = "warn";

#[derive(Clone)]
pub struct Config {
    pub access_token: String,
    pub base_url: String,
}

// The token must never end up in logs or panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = [TOKEN_VAR, LEGACY_TOKEN_VAR]
            .iter()
            .filter_map(|key| lookup(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .ok_or_else(|| {
                Error::config_missing_key(TOKEN_VAR, Some("environment".to_string())).with_hint(
                    format!(
                        "Export a personal access token: export {}=<token>",
                        TOKEN_VAR
                    ),
                )
            })?;

        let base_url = match lookup(BASE_URL_VAR) {
            Some(raw) if !raw.trim().is_empty() => normalize_base_url(&raw)?,
            _ => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self {
            access_token,
            base_url,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(Error::config_invalid_value(
            BASE_URL_VAR,
            Some(raw.to_string()),
            "Base URL must start with http:// or https://",
        ));
    }
    Ok(trimmed.to_string())
}

/// Log filter spec for the diagnostic logger.
pub fn log_spec() -> String {
    std::env::var(LOG_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_SPEC.to_string())
}
