//! Read-through page fetching: cache first, network on a miss.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::infrastructure::config::DelayRange;
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::page_cache::PageCache;

/// Source of search-result pages.
///
/// The orchestrator only sees this seam; tests substitute a scripted
/// implementation. `None` means "no content for this URL in this run" -
/// the failure has already been logged where it happened.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Option<String>;
}

/// Production fetcher: page cache in front of the HTTP client.
///
/// A cache hit returns immediately with no delay and no network call. A
/// miss sleeps a random politeness delay, issues the request, and stores
/// the body back into the cache on success.
pub struct CachingFetcher {
    http: HttpClient,
    cache: Option<PageCache>,
    fetch_delay: DelayRange,
}

impl CachingFetcher {
    pub fn new(http: HttpClient, cache: Option<PageCache>, fetch_delay: DelayRange) -> Self {
        Self { http, cache, fetch_delay }
    }
}

#[async_trait]
impl PageFetcher for CachingFetcher {
    async fn fetch_page(&self, url: &str) -> Option<String> {
        if let Some(cache) = &self.cache {
            if let Some(content) = cache.get(url) {
                debug!("Serving {} from cache", url);
                return Some(content);
            }
        }

        tokio::time::sleep(self.fetch_delay.sample()).await;

        match self.http.fetch_text(url).await {
            Ok(body) => {
                if let Some(cache) = &self.cache {
                    if let Err(e) = cache.put(url, &body) {
                        warn!("Failed to cache {}: {:#}", url, e);
                    }
                }
                Some(body)
            }
            Err(e) => {
                warn!("Fetch failed for {}: {:#}", url, e);
                None
            }
        }
    }
}
