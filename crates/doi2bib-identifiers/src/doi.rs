//! DOI normalization

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::ResolveError;

lazy_static! {
    // Resolver URL prefix, any case, anywhere in the input
    static ref RESOLVER_PREFIX_REGEX: Regex = Regex::new(r"(?i)https?://doi\.org/").unwrap();
}

/// A normalized DOI: trimmed, non-empty, without a `doi.org` URL prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Doi(String);

impl Doi {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Doi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Doi {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_doi(s)
    }
}

/// Normalize DOI input
///
/// Accepts a bare DOI or one prefixed with `http://doi.org/` or
/// `https://doi.org/` (scheme and host in any case). Every prefix occurrence
/// is removed, then surrounding whitespace.
pub fn normalize_doi(input: &str) -> Result<Doi, ResolveError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::InvalidInput);
    }

    let stripped = RESOLVER_PREFIX_REGEX.replace_all(trimmed, "");
    let doi = stripped.trim();
    if doi.is_empty() {
        return Err(ResolveError::InvalidInput);
    }

    Ok(Doi(doi.to_string()))
}
