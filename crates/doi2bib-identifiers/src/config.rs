//! Resolver configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Default resolver host
pub const DEFAULT_RESOLVER_URL: &str = "https://doi.org/";

/// Content type requested from the resolver
pub const BIBTEX_ACCEPT: &str = "application/x-bibtex; charset=utf-8";

/// Settings for the outbound resolver request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Base URL the DOI is appended to; must end with `/`
    pub base_url: String,
    /// Accept header sent with the request
    pub accept: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with the request
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RESOLVER_URL.to_string(),
            accept: BIBTEX_ACCEPT.to_string(),
            timeout_secs: 30,
            user_agent: concat!("doi2bib/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ResolverConfig {
    /// Default configuration pointing at a different resolver
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                message: format!("unsupported scheme {}", url.scheme()),
            });
        }

        if !self.base_url.ends_with('/') {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                message: "must end with '/'".to_string(),
            });
        }

        if self.accept.trim().is_empty() {
            return Err(ConfigError::OutOfRange(
                "accept must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, "https://doi.org/");
        assert_eq!(config.accept, "application/x-bibtex; charset=utf-8");
        assert!(config.user_agent.starts_with("doi2bib/"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ResolverConfig::with_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));

        let config = ResolverConfig::with_base_url("ftp://doi.org/");
        assert!(config.validate().is_err());

        let config = ResolverConfig::with_base_url("https://doi.org");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range() {
        let mut config = ResolverConfig::default();
        config.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));

        let mut config = ResolverConfig::default();
        config.accept = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8080/"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.timeout_secs, 30);
    }
}
