//! Orchestrator behavior under partial failure, driven by a scripted
//! page source instead of the network.

use async_trait::async_trait;
use std::collections::HashMap;

use jobsift::application::{ScrapeOrchestrator, ScrapeRequest};
use jobsift::infrastructure::config::{DelayRange, ScraperConfig};
use jobsift::infrastructure::fetcher::PageFetcher;

/// Maps the `start` offset of each requested URL to a scripted outcome;
/// missing entries simulate a transient fetch failure.
struct ScriptedFetcher {
    pages: HashMap<u32, String>,
}

impl ScriptedFetcher {
    fn new(pages: &[(u32, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(start, html)| (*start, html.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch_page(&self, url: &str) -> Option<String> {
        let start: u32 = url
            .rsplit("start=")
            .next()
            .and_then(|s| s.parse().ok())
            .expect("search url carries a start offset");
        self.pages.get(&start).cloned()
    }
}

fn result_page(titles: &[&str]) -> String {
    let cards: String = titles
        .iter()
        .map(|title| {
            format!(
                r#"<div class="job_seen_beacon" data-jk="{id}">
                    <h2 class="jobTitle">{title}</h2>
                    <span class="companyName">Acme Corp</span>
                    <div class="job-snippet">SQL and Excel day to day.</div>
                </div>"#,
                id = title.to_lowercase().replace(' ', "-"),
            )
        })
        .collect();
    format!("<html><body>{cards}</body></html>")
}

fn fast_config() -> ScraperConfig {
    let mut config = ScraperConfig::default();
    config.fetch_delay = DelayRange::new(0, 0);
    config.page_delay = DelayRange::new(0, 0);
    config
}

fn request(pages: u32) -> ScrapeRequest {
    ScrapeRequest {
        query: "data analyst".to_string(),
        location: String::new(),
        pages,
    }
}

#[tokio::test]
async fn failed_middle_page_is_omitted_without_gap_filling() {
    // Page 2 (start=10) has no scripted entry, so its fetch fails.
    let fetcher = ScriptedFetcher::new(&[
        (0, result_page(&["Data Analyst", "BI Developer"]).as_str()),
        (20, result_page(&["Data Engineer"]).as_str()),
    ]);
    let orchestrator = ScrapeOrchestrator::new(fetcher, &fast_config()).unwrap();

    let records = orchestrator.run(&request(3)).await;

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Data Analyst", "BI Developer", "Data Engineer"]);
}

#[tokio::test]
async fn all_pages_failing_yields_empty_not_error() {
    let fetcher = ScriptedFetcher::new(&[]);
    let orchestrator = ScrapeOrchestrator::new(fetcher, &fast_config()).unwrap();

    let records = orchestrator.run(&request(3)).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn accumulated_records_are_skill_tagged_at_the_end() {
    let fetcher = ScriptedFetcher::new(&[(0, result_page(&["Data Analyst"]).as_str())]);
    let orchestrator = ScrapeOrchestrator::new(fetcher, &fast_config()).unwrap();

    let records = orchestrator.run(&request(1)).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].skills, vec!["sql", "excel"]);
    assert_eq!(
        records[0].detail_link,
        "https://www.indeed.com/viewjob?jk=data-analyst"
    );
}
