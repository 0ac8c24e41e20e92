//! Client configuration: where to send requests and which key to send.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{ApiError, Result};

/// Production API root used when no base path is given.
pub const DEFAULT_BASE_PATH: &str = "https://api.satisfycx.ai/api/v1";

/// Fixed per-request timeout applied by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_ENV: &str = "SCX_API_KEY";
pub const BASE_PATH_ENV: &str = "SCX_BASE_PATH";

/// Immutable settings shared by every facade of one `ScxClient`.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_path: String,
    api_key: String,
    timeout: Duration,
}

impl ClientConfig {
    /// An empty `base_path` selects [`DEFAULT_BASE_PATH`]. The base path must
    /// be an absolute URL that can carry path segments.
    pub fn new(api_key: impl Into<String>, base_path: &str) -> Result<Self> {
        let base_path = match base_path.trim_end_matches('/') {
            "" => DEFAULT_BASE_PATH,
            trimmed => trimmed,
        };
        let url = Url::parse(base_path)?;
        if url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "base path {base_path} cannot hold path segments"
            )));
        }
        Ok(Self {
            base_path: base_path.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads `SCX_API_KEY` (required) and `SCX_BASE_PATH` (optional).
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(BASE_PATH_ENV).ok(),
        )
    }

    fn from_vars(api_key: Option<String>, base_path: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ApiError::Config(format!("{API_KEY_ENV} is not set")))?;
        Self::new(api_key, base_path.as_deref().unwrap_or_default())
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_path", &self.base_path)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_path_uses_default() {
        let config = ClientConfig::new("key", "").unwrap();
        assert_eq!(config.base_path(), DEFAULT_BASE_PATH);
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn custom_base_path_drops_trailing_slash() {
        let config = ClientConfig::new("key", "http://localhost:8080/api/").unwrap();
        assert_eq!(config.base_path(), "http://localhost:8080/api");
    }

    #[test]
    fn relative_base_path_is_rejected() {
        let err = ClientConfig::new("key", "api/v1").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn opaque_base_path_is_rejected() {
        let err = ClientConfig::new("key", "mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let err = ClientConfig::from_vars(None, None).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        let err = ClientConfig::from_vars(Some(String::new()), None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn vars_override_base_path() {
        let config = ClientConfig::from_vars(
            Some("secret".to_string()),
            Some("http://127.0.0.1:3000".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_path(), "http://127.0.0.1:3000");
        assert_eq!(config.bearer(), "Bearer secret");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ClientConfig::new("super-secret", "").unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
