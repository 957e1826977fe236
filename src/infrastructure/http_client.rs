//! HTTP client for page fetching with anti-blocking headers.
//!
//! Wraps a reqwest client configured to look like an ordinary browser
//! session: cookie store, gzip, a fixed plausible header set and a user
//! agent drawn at random from the process-wide pool on every request.

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

use crate::domain::constants::USER_AGENTS;

/// Configuration for HTTP client behavior.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self { timeout_seconds: 30 }
    }
}

/// HTTP client issuing browser-like GET requests.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(Self::default_headers())
            .cookie_store(true)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client })
    }

    /// Fixed header set claiming an ordinary search-engine-referred visit.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));
        headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
        headers
    }

    /// One user agent chosen uniformly at random from the pool.
    fn random_user_agent() -> &'static str {
        USER_AGENTS[fastrand::usize(..USER_AGENTS.len())]
    }

    /// Fetch the body of `url` as text.
    ///
    /// Fails on transport errors, non-success statuses and empty bodies;
    /// callers decide whether that aborts anything (it never aborts a run).
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let user_agent = Self::random_user_agent();
        debug!("HTTP GET {} (ua: {})", url, user_agent);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await
            .with_context(|| format!("Failed to fetch URL: {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP error {status}: {url}"));
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from: {url}"))?;

        if body.is_empty() {
            return Err(anyhow!("Empty response from {url}"));
        }

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
