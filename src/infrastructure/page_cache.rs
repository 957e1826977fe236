//! On-disk page cache with time-based expiry.
//!
//! One text blob per sanitized URL key; the file's modification timestamp
//! is the freshness marker. There is no index file and no eviction policy:
//! stale entries are ignored on read and overwritten by the next
//! successful fetch.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};

// Every maximal run of non-word characters collapses to one separator.
static NON_WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("key pattern"));

/// Read-through cache mapping URLs to previously fetched HTML text.
pub struct PageCache {
    dir: PathBuf,
    ttl: Duration,
}

impl PageCache {
    /// Open (and create if needed) a cache rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
        debug!("Page cache at {:?} (ttl {}s)", dir, ttl.as_secs());
        Ok(Self { dir, ttl })
    }

    /// Filesystem-safe key for a URL.
    pub fn sanitize_key(url: &str) -> String {
        NON_WORD_RUN.replace_all(url, "_").into_owned()
    }

    /// Cached content for `url`, if present and younger than the TTL.
    ///
    /// Stale or unreadable entries are treated as misses, never as errors.
    pub fn get(&self, url: &str) -> Option<String> {
        let path = self.entry_path(url);
        let modified = std::fs::metadata(&path).ok()?.modified().ok()?;
        let age = SystemTime::now().duration_since(modified).ok()?;

        if age >= self.ttl {
            debug!("Cache entry expired ({}s old): {}", age.as_secs(), url);
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Cache hit ({}s old): {}", age.as_secs(), url);
                Some(content)
            }
            Err(e) => {
                warn!("Failed to read cache entry {:?}: {}", path, e);
                None
            }
        }
    }

    /// Store (or overwrite) the content for `url`.
    pub fn put(&self, url: &str, content: &str) -> Result<()> {
        let path = self.entry_path(url);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write cache entry {:?}", path))?;
        debug!("Cached {} bytes for {}", content.len(), url);
        Ok(())
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.html", Self::sanitize_key(url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const URL: &str = "https://www.indeed.com/jobs?q=data+analyst&l=&start=0";

    #[test]
    fn sanitize_collapses_non_word_runs_to_one_separator() {
        assert_eq!(
            PageCache::sanitize_key(URL),
            "https_www_indeed_com_jobs_q_data_analyst_l_start_0"
        );
    }

    #[test]
    fn get_returns_stored_content_within_ttl() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path(), Duration::from_secs(3600)).unwrap();

        assert!(cache.get(URL).is_none());
        cache.put(URL, "<html>jobs</html>").unwrap();
        assert_eq!(cache.get(URL).as_deref(), Some("<html>jobs</html>"));
    }

    #[test]
    fn expired_entry_is_a_miss_and_put_overwrites_it() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path(), Duration::ZERO).unwrap();

        cache.put(URL, "first").unwrap();
        // Zero TTL: every entry is immediately stale.
        assert!(cache.get(URL).is_none());

        cache.put(URL, "second").unwrap();
        let path = dir.path().join(format!("{}.html", PageCache::sanitize_key(URL)));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn distinct_urls_use_distinct_entries() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path(), Duration::from_secs(3600)).unwrap();

        cache.put("https://example.com/a", "page a").unwrap();
        cache.put("https://example.com/b", "page b").unwrap();
        assert_eq!(cache.get("https://example.com/a").as_deref(), Some("page a"));
        assert_eq!(cache.get("https://example.com/b").as_deref(), Some("page b"));
    }
}
