use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_SCHEME, DEFAULT_BASE_URL, DEFAULT_CSRF_HEADER,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Remote ClosetAI backend settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme + host (+ port) of the backend, without a trailing path
    pub base_url: String,
    pub timeout_secs: u64,
    /// Prefix placed before the credential in the Authorization header
    pub auth_scheme: String,
    /// Header carrying the anti-forgery token on state-changing requests
    pub csrf_header: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth_scheme: String::from(DEFAULT_AUTH_SCHEME),
            csrf_header: String::from(DEFAULT_CSRF_HEADER),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.auth_scheme.trim().is_empty() {
            return Err(ConfigError::api("api.auth_scheme cannot be empty"));
        }

        if self.csrf_header.trim().is_empty() {
            return Err(ConfigError::api("api.csrf_header cannot be empty"));
        }

        Ok(())
    }
}
