//! Auth client configuration parsed from environment variables.

use std::path::PathBuf;

use crate::error::AuthError;

pub const BASE_URL_VAR: &str = "AUTHKIT_BASE_URL";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// API origin the three auth endpoints hang off of. No trailing slash.
    pub base_url: String,
    pub timeouts: HttpTimeouts,
    /// Explicit file-vault directory; platform data dir when absent.
    pub vault_dir: Option<PathBuf>,
}

impl AuthConfig {
    /// Build a config with default timeouts and the default vault directory.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeouts: HttpTimeouts::default(),
            vault_dir: None,
        }
    }

    /// Build typed auth config from environment variables.
    ///
    /// Required:
    /// - `AUTHKIT_BASE_URL`: API origin (trailing slash trimmed)
    ///
    /// Optional:
    /// - `AUTHKIT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `AUTHKIT_CONNECT_TIMEOUT_SECS`: default 10
    /// - `AUTHKIT_VAULT_DIR`: overrides the platform data directory
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingBaseUrl`] when `AUTHKIT_BASE_URL` is unset.
    pub fn from_env() -> Result<Self, AuthError> {
        let base_url = std::env::var(BASE_URL_VAR)
            .map_err(|_| AuthError::MissingBaseUrl { var: BASE_URL_VAR.into() })?
            .trim_end_matches('/')
            .to_string();

        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("AUTHKIT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("AUTHKIT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        let vault_dir = std::env::var("AUTHKIT_VAULT_DIR").ok().map(PathBuf::from);

        Ok(Self { base_url, timeouts, vault_dir })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
