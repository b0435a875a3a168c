//! DOI resolution to BibTeX
//!
//! Maps a DOI to its BibTeX record by asking the resolver host for
//! `application/x-bibtex` through content negotiation. One request per call,
//! no retries, no caching.

use crate::config::ResolverConfig;
use crate::doi::{normalize_doi, Doi};
use crate::error::ResolveError;
use crate::http::HttpClient;

/// Resolves DOIs against a configured resolver host
pub struct DoiResolver {
    config: ResolverConfig,
    http: HttpClient,
}

impl DoiResolver {
    /// Create a resolver with the given configuration
    pub fn new(config: ResolverConfig) -> Result<Self, ResolveError> {
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// URL requested for a DOI: the resolver base followed by the DOI
    pub fn resolver_url(&self, doi: &Doi) -> String {
        format!("{}{}", self.config.base_url, doi)
    }

    /// Fetch the raw BibTeX for a DOI, with or without a `doi.org` prefix.
    ///
    /// The response body is returned unmodified.
    pub async fn resolve_to_bibtex(&self, input: &str) -> Result<String, ResolveError> {
        let doi = normalize_doi(input)?;
        self.fetch(&doi).await
    }

    /// Fetch the raw BibTeX for an already normalized DOI
    pub async fn fetch(&self, doi: &Doi) -> Result<String, ResolveError> {
        let url = self.resolver_url(doi);
        tracing::debug!("Resolving DOI {} via {}", doi, url);

        let response = self.http.get_with_accept(&url, &self.config.accept).await?;

        if !response.is_success() {
            tracing::warn!("Resolver returned HTTP {} for DOI {}", response.status, doi);
            return Err(ResolveError::Resolution {
                status: response.status,
                doi: doi.to_string(),
            });
        }

        tracing::debug!("Resolved DOI {} ({} bytes)", doi, response.body.len());
        Ok(response.body)
    }
}

/// Resolve a DOI with the default resolver configuration
pub async fn resolve_doi_to_bibtex(input: &str) -> Result<String, ResolveError> {
    DoiResolver::new(ResolverConfig::default())?
        .resolve_to_bibtex(input)
        .await
}
