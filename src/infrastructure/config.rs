//! Configuration infrastructure
//!
//! Configuration loading and management for the job-board scraper.
//! Settings live in a JSON file under the user's config directory and are
//! created with defaults on first run. CLI flags may override individual
//! values after loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tracing::info;

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scraping behavior (delays, cache, output).
    pub scraper: ScraperConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Scraping behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Random politeness delay before each cache-miss network request.
    pub fetch_delay: DelayRange,

    /// Random delay after each result page, before the next one.
    pub page_delay: DelayRange,

    /// Result-page offset step (the site paginates in multiples of 10).
    pub page_size: u32,

    /// Page cache settings.
    pub cache: CacheConfig,

    /// Destination of the exported CSV table.
    pub output_path: PathBuf,

    /// Number of records echoed as a JSON sample after a run (0 disables).
    pub sample_size: usize,
}

/// On-disk page cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether fetched pages are cached at all.
    pub enabled: bool,

    /// Cache directory; defaults to the per-user data directory when unset.
    pub directory: Option<PathBuf>,

    /// Maximum age of a cached page before it is refetched.
    pub ttl_seconds: u64,
}

/// Logging configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: String,

    /// Enable console output.
    pub console_output: bool,

    /// Enable file output.
    pub file_output: bool,
}

/// Inclusive range of milliseconds a random delay is drawn from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Draw a duration uniformly from the range.
    pub fn sample(&self) -> Duration {
        let upper = self.max_ms.max(self.min_ms);
        Duration::from_millis(fastrand::u64(self.min_ms..=upper))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            fetch_delay: DelayRange::new(defaults::FETCH_DELAY_MIN_MS, defaults::FETCH_DELAY_MAX_MS),
            page_delay: DelayRange::new(defaults::PAGE_DELAY_MIN_MS, defaults::PAGE_DELAY_MAX_MS),
            page_size: defaults::PAGE_SIZE,
            cache: CacheConfig::default(),
            output_path: PathBuf::from(defaults::OUTPUT_PATH),
            sample_size: defaults::SAMPLE_SIZE,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: None,
            ttl_seconds: defaults::CACHE_TTL_SECONDS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            console_output: true,
            file_output: true,
        }
    }
}

/// Configuration manager for loading and saving settings.
pub struct ConfigManager {
    pub config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory.
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join("jobsift");

        Ok(config_dir)
    }

    /// Get the application data directory (cache and log storage).
    pub fn get_app_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .context("Failed to get user data directory")?
            .join("jobsift");

        Ok(data_dir)
    }

    /// Default cache directory under the application data directory.
    pub fn default_cache_dir() -> Result<PathBuf> {
        Ok(Self::get_app_data_dir()?.join("cache"))
    }

    /// Create a new configuration manager.
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        let config_path = config_dir.join("jobsift_config.json");

        Ok(Self { config_path })
    }

    /// Initialize the configuration system, writing defaults on first run.
    pub async fn initialize_on_first_run(&self) -> Result<AppConfig> {
        let config_dir = self
            .config_path
            .parent()
            .context("Failed to get config directory")?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .await
                .context("Failed to create config directory")?;
            info!("Created configuration directory: {:?}", config_dir);
        }

        if !self.config_path.exists() {
            info!("First run detected - initializing default configuration");
            let default_config = AppConfig::default();
            self.save_config(&default_config).await?;
            Ok(default_config)
        } else {
            self.load_config().await
        }
    }

    /// Load configuration from file, creating defaults if it doesn't exist.
    pub async fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!("Configuration file not found, creating default: {:?}", self.config_path);
            let default_config = AppConfig::default();
            self.save_config(&default_config).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .context("Failed to read configuration file")?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration file: {:?}", self.config_path))?;

        info!("Loaded configuration from: {:?}", self.config_path);
        Ok(config)
    }

    /// Save configuration to file.
    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration")?;

        fs::write(&self.config_path, content)
            .await
            .context("Failed to write configuration file")?;

        Ok(())
    }
}

/// Default values for configuration settings.
pub mod defaults {
    /// Default request timeout in seconds.
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    /// Politeness delay drawn before each cache-miss request, lower bound.
    pub const FETCH_DELAY_MIN_MS: u64 = 1_000;

    /// Politeness delay drawn before each cache-miss request, upper bound.
    pub const FETCH_DELAY_MAX_MS: u64 = 3_000;

    /// Delay drawn after each result page, lower bound.
    pub const PAGE_DELAY_MIN_MS: u64 = 2_000;

    /// Delay drawn after each result page, upper bound.
    pub const PAGE_DELAY_MAX_MS: u64 = 5_000;

    /// Result-page offset step used by the search endpoint.
    pub const PAGE_SIZE: u32 = 10;

    /// Maximum age of a cached page before it is considered stale.
    pub const CACHE_TTL_SECONDS: u64 = 3_600;

    /// Default CSV output path.
    pub const OUTPUT_PATH: &str = "jobs.csv";

    /// Default number of records echoed as a JSON sample.
    pub const SAMPLE_SIZE: usize = 3;

    /// Default log level.
    pub const LOG_LEVEL: &str = "info";
}

/// Job-board endpoint constants and URL builders.
pub mod indeed {
    /// Base URL of the job board.
    pub const BASE_URL: &str = "https://www.indeed.com";

    /// Search endpoint for result pages.
    pub const SEARCH_ENDPOINT: &str = "https://www.indeed.com/jobs";

    /// Detail endpoint a card identifier is formatted into.
    pub const VIEWJOB_ENDPOINT: &str = "https://www.indeed.com/viewjob";

    /// Search URL for one result page.
    ///
    /// Spaces in the query and location become literal `+`; `start` is the
    /// page offset in multiples of the page size.
    pub fn search_url(query: &str, location: &str, start: u32) -> String {
        let q = query.trim().replace(' ', "+");
        let l = location.trim().replace(' ', "+");
        format!("{SEARCH_ENDPOINT}?q={q}&l={l}&start={start}")
    }

    /// Canonical detail URL for a card identifier.
    pub fn viewjob_url(job_key: &str) -> String {
        format!("{VIEWJOB_ENDPOINT}?jk={job_key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.scraper.page_size, defaults::PAGE_SIZE);
        assert_eq!(restored.scraper.cache.ttl_seconds, defaults::CACHE_TTL_SECONDS);
        assert!(restored.logging.console_output);
    }

    #[test]
    fn search_url_replaces_spaces_with_plus() {
        let url = indeed::search_url("data analyst", "New York", 20);
        assert_eq!(url, "https://www.indeed.com/jobs?q=data+analyst&l=New+York&start=20");
    }

    #[test]
    fn search_url_with_empty_location() {
        let url = indeed::search_url("data analyst", "", 0);
        assert_eq!(url, "https://www.indeed.com/jobs?q=data+analyst&l=&start=0");
    }

    #[test]
    fn viewjob_url_formats_the_card_identifier() {
        assert_eq!(
            indeed::viewjob_url("abc123def"),
            "https://www.indeed.com/viewjob?jk=abc123def"
        );
    }

    #[test]
    fn delay_range_sample_stays_in_bounds() {
        let range = DelayRange::new(100, 200);
        for _ in 0..50 {
            let d = range.sample();
            assert!(d >= Duration::from_millis(100) && d <= Duration::from_millis(200));
        }
    }

    #[test]
    fn zero_delay_range_samples_zero() {
        let range = DelayRange::new(0, 0);
        assert_eq!(range.sample(), Duration::ZERO);
    }
}
