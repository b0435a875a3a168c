//! Native HTTP client using reqwest

use reqwest::{header, redirect, Client};

use crate::config::ResolverConfig;

/// Redirect hops followed before giving up
const MAX_REDIRECTS: usize = 10;

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &ResolverConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }

    /// GET a URL with the given Accept header.
    ///
    /// Redirects are followed; the final status is returned as-is and is not
    /// treated as an error here.
    pub async fn get_with_accept(
        &self,
        url: &str,
        accept: &str,
    ) -> Result<HttpResponse, reqwest::Error> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
