//! jobsift — a small job-listing scraper.
//!
//! Fetches search-result pages from a job board, parses job cards out of
//! the HTML behind an on-disk page cache, tags each record's snippet with
//! a fixed skill vocabulary, and writes the aggregated table to CSV.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ScrapeOrchestrator, ScrapeRequest};
pub use domain::{JobRecord, SkillTagger};
pub use infrastructure::{CachingFetcher, HttpClient, PageCache, PageFetcher};
