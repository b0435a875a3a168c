//! Application error types

use std::path::PathBuf;

use doi2bib_bibtex::FormatError;
use doi2bib_identifiers::ResolveError;
use thiserror::Error;

use crate::input::InputError;

/// Any failure behind an entry point
#[derive(Error, Debug)]
pub enum Doi2BibError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid value for {var}: {value}")]
    Env { var: &'static str, value: String },
    #[error(transparent)]
    Invalid(#[from] doi2bib_identifiers::ConfigError),
}
