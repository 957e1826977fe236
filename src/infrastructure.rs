//! Infrastructure layer: configuration, logging, HTTP, caching, HTML
//! parsing and export.

pub mod config;
pub mod export;
pub mod fetcher;
pub mod http_client;
pub mod logging;
pub mod page_cache;
pub mod parsing;

pub use config::{AppConfig, ConfigManager};
pub use fetcher::{CachingFetcher, PageFetcher};
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::{init_logging, init_logging_with_config};
pub use page_cache::PageCache;
pub use parsing::{CardLocator, ParseError, ParseResult, RecordExtractor};
