//! doi2bib entry points
//!
//! Thin adapters over the resolver and the normalizer for host environments
//! that want a single string back. The `try_*` functions keep structured
//! errors; the plain ones render any failure as `Error: <message>`.

pub mod config;
pub mod error;
pub mod input;

use doi2bib_identifiers::DoiResolver;

pub use config::Doi2BibConfig;
pub use error::{ConfigError, Doi2BibError};
pub use input::{HostInput, InputError};

/// Prefix of every rendered failure
pub const ERROR_PREFIX: &str = "Error: ";

/// Resolve a DOI to its raw BibTeX
pub async fn try_to_bibtex(
    resolver: &DoiResolver,
    input: impl Into<HostInput>,
) -> Result<String, Doi2BibError> {
    let doi = input.into().into_text()?;
    Ok(resolver.resolve_to_bibtex(&doi).await?)
}

/// Resolve a DOI to its raw BibTeX, or an `Error: ...` string
pub async fn to_bibtex(resolver: &DoiResolver, input: impl Into<HostInput>) -> String {
    render(try_to_bibtex(resolver, input).await)
}

/// Reformat raw BibTeX
pub fn try_format_bibtex(input: impl Into<HostInput>) -> Result<String, Doi2BibError> {
    let raw = input.into().into_text()?;
    Ok(doi2bib_bibtex::format_bibtex(raw.trim())?)
}

/// Reformat raw BibTeX, or an `Error: ...` string
pub fn format_bibtex(input: impl Into<HostInput>) -> String {
    render(try_format_bibtex(input))
}

/// Resolve a DOI and reformat the result
pub async fn try_cite(
    resolver: &DoiResolver,
    input: impl Into<HostInput>,
) -> Result<String, Doi2BibError> {
    let raw = try_to_bibtex(resolver, input).await?;
    Ok(doi2bib_bibtex::format_bibtex(&raw)?)
}

/// Resolve a DOI and reformat the result, or an `Error: ...` string
pub async fn cite(resolver: &DoiResolver, input: impl Into<HostInput>) -> String {
    render(try_cite(resolver, input).await)
}

fn render(result: Result<String, Doi2BibError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => format!("{}{}", ERROR_PREFIX, e),
    }
}
