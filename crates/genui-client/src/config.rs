//! Schema source configuration.
//!
//! Configures the endpoint a panel's schema documents are fetched from.
//! Override via environment variables or explicit construction for
//! staging/testing.

use url::Url;

/// Configuration for connecting to a schema source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the schema source. Documents are fetched from
    /// `{base_url}/schemas/{name}.json`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl SourceConfig {
    /// Configuration with the default timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 30,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GENUI_SCHEMA_URL` (required)
    /// - `GENUI_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("GENUI_SCHEMA_URL").map_err(|_| ConfigError::MissingUrl)?;
        let base_url =
            Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(raw, e.to_string()))?;
        Ok(Self {
            base_url,
            timeout_secs: std::env::var("GENUI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GENUI_SCHEMA_URL environment variable is required")]
    MissingUrl,
    #[error("invalid schema source URL '{0}': {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_timeout() {
        let config = SourceConfig::new("http://127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.timeout_secs, 30);
    }
}
