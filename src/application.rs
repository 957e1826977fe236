//! Application layer: the scrape orchestration loop and the end-of-run
//! frequency report.

pub mod orchestrator;
pub mod report;

pub use orchestrator::{ScrapeOrchestrator, ScrapeRequest};
