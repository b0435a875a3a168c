//! Configuration loading
//!
//! Precedence, lowest to highest: built-in defaults, the TOML config file,
//! `DOI2BIB_*` environment variables, command-line flags.

use std::path::{Path, PathBuf};

use doi2bib_identifiers::ResolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable overriding the resolver base URL
pub const RESOLVER_ENV: &str = "DOI2BIB_RESOLVER";

/// Environment variable overriding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "DOI2BIB_TIMEOUT";

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Doi2BibConfig {
    pub resolver: ResolverConfig,
}

impl Doi2BibConfig {
    /// Default config file location (`<config dir>/doi2bib/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("doi2bib").join("config.toml"))
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load from an explicit path, or from the default location if present.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (Some(path.to_path_buf()), true),
            None => (Self::default_path(), false),
        };

        let config = match path {
            Some(path) if required || path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
                tracing::debug!("Loaded config from {:?}", path);
                Self::from_toml(&content)?
            }
            _ => Self::default(),
        };

        Ok(config)
    }

    /// Apply `DOI2BIB_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(RESOLVER_ENV) {
            self.resolver.base_url = url;
        }

        if let Some(value) = lookup(TIMEOUT_ENV) {
            self.resolver.timeout_secs = value.trim().parse().map_err(|_| ConfigError::Env {
                var: TIMEOUT_ENV,
                value: value.clone(),
            })?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(self.resolver.validate()?)
    }
}
