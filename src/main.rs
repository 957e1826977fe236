//! Command-line entry point: configuration, logging, one scrape run,
//! CSV export and the frequency report.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use jobsift::application::{report, ScrapeOrchestrator, ScrapeRequest};
use jobsift::infrastructure::config::ConfigManager;
use jobsift::infrastructure::export;
use jobsift::infrastructure::fetcher::CachingFetcher;
use jobsift::infrastructure::http_client::{HttpClient, HttpClientConfig};
use jobsift::infrastructure::logging::init_logging_with_config;
use jobsift::infrastructure::page_cache::PageCache;

#[derive(Parser, Debug)]
#[command(name = "jobsift", version, about = "Scrape job listings into a skills-tagged CSV")]
struct Cli {
    /// Search query
    #[arg(short, long, default_value = "data analyst")]
    query: String,

    /// Location filter (empty means anywhere)
    #[arg(short, long, default_value = "")]
    location: String,

    /// Number of result pages to scrape
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Output CSV path (overrides the configured path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Bypass the page cache for this run
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = ConfigManager::new()?;
    let mut config = manager.initialize_on_first_run().await?;

    if cli.no_cache {
        config.scraper.cache.enabled = false;
    }
    if let Some(output) = cli.output {
        config.scraper.output_path = output;
    }

    init_logging_with_config(&config.logging)?;
    info!("jobsift v{}", env!("CARGO_PKG_VERSION"));

    let cache = if config.scraper.cache.enabled {
        let dir = match &config.scraper.cache.directory {
            Some(dir) => dir.clone(),
            None => ConfigManager::default_cache_dir()?,
        };
        let ttl = Duration::from_secs(config.scraper.cache.ttl_seconds);
        Some(PageCache::new(dir, ttl).context("Failed to open page cache")?)
    } else {
        info!("Page cache disabled for this run");
        None
    };

    let http = HttpClient::new(HttpClientConfig {
        timeout_seconds: config.scraper.request_timeout_seconds,
    })?;
    let fetcher = CachingFetcher::new(http, cache, config.scraper.fetch_delay.clone());

    let orchestrator = ScrapeOrchestrator::new(fetcher, &config.scraper)
        .context("Failed to build orchestrator")?;

    let request = ScrapeRequest {
        query: cli.query,
        location: cli.location,
        pages: cli.pages,
    };
    info!(
        "Starting scrape: query={:?} location={:?} pages={}",
        request.query, request.location, request.pages
    );

    let records = orchestrator.run(&request).await;

    export::write_csv(&records, &config.scraper.output_path)?;

    if records.is_empty() {
        warn!("No records scraped; the output table is empty");
    } else if config.scraper.sample_size > 0 {
        let sample = export::sample_json(&records, config.scraper.sample_size)?;
        info!("Sample of scraped records:\n{}", sample);
    }

    report::print_summary(&records, 10);
    info!(
        "Scraped {} jobs. Data saved to {}",
        records.len(),
        config.scraper.output_path.display()
    );

    Ok(())
}
