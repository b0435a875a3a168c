//! Resolver error types

use thiserror::Error;

/// Errors raised while normalizing or resolving a DOI
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Empty input, or nothing left after stripping the resolver prefix
    #[error("No DOI provided")]
    InvalidInput,
    /// The resolver answered with a non-success status
    #[error("HTTP {status}: Could not fetch BibTeX for DOI: {doi}")]
    Resolution { status: u16, doi: String },
    /// DNS, connect, timeout or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ResolveError {
    /// HTTP status of a resolution failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ResolveError::Resolution { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Invalid resolver configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid resolver URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}
