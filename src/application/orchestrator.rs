//! Scrape orchestration: pagination, per-page fault tolerance, pacing and
//! the final skill-tagging pass.

use scraper::Html;
use tracing::{info, warn};

use crate::domain::job::JobRecord;
use crate::domain::skills::SkillTagger;
use crate::infrastructure::config::{indeed, DelayRange, ScraperConfig};
use crate::infrastructure::fetcher::PageFetcher;
use crate::infrastructure::parsing::{CardLocator, ParseResult, RecordExtractor};

/// One scrape run's inputs.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    /// Free-text search query.
    pub query: String,
    /// Optional location filter; empty means "anywhere".
    pub location: String,
    /// Number of result pages to walk.
    pub pages: u32,
}

/// Drives pagination and composes fetcher, locator, extractor and tagger.
///
/// Tolerates partial failure everywhere: a failed page, a markerless page
/// or an unreadable card each cost only their own results.
pub struct ScrapeOrchestrator<F: PageFetcher> {
    fetcher: F,
    locator: CardLocator,
    extractor: RecordExtractor,
    tagger: SkillTagger,
    page_size: u32,
    page_delay: DelayRange,
}

impl<F: PageFetcher> ScrapeOrchestrator<F> {
    /// Orchestrator with default markers and the given scraper settings.
    pub fn new(fetcher: F, config: &ScraperConfig) -> ParseResult<Self> {
        Ok(Self {
            fetcher,
            locator: CardLocator::new()?,
            extractor: RecordExtractor::new()?,
            tagger: SkillTagger::new(),
            page_size: config.page_size,
            page_delay: config.page_delay.clone(),
        })
    }

    /// Run the scrape and return everything accumulated.
    ///
    /// Never fails: every page and card error is logged and absorbed, and
    /// an empty result set is a valid (if warned-about) outcome.
    pub async fn run(&self, request: &ScrapeRequest) -> Vec<JobRecord> {
        let mut records = Vec::new();

        for page in 0..request.pages {
            let start = page * self.page_size;
            let url = indeed::search_url(&request.query, &request.location, start);
            info!("Scraping page {}/{}: {}", page + 1, request.pages, url);

            match self.fetcher.fetch_page(&url).await {
                Some(html) => {
                    let page_records = self.collect_page(&html, page);
                    info!("Page {} yielded {} records", page + 1, page_records.len());
                    records.extend(page_records);
                }
                None => {
                    warn!("Skipping page {}: no content", page + 1);
                }
            }

            // Pacing between pages, independent of fetch outcome.
            if page + 1 < request.pages {
                tokio::time::sleep(self.page_delay.sample()).await;
            }
        }

        for record in &mut records {
            record.skills = self.tagger.tag(&record.snippet);
        }

        if records.is_empty() {
            warn!("Scrape finished with zero records");
        }

        records
    }

    /// Parse one page and extract its cards.
    ///
    /// Synchronous on purpose: the parsed document must not live across an
    /// await point (`scraper::Html` is not Send).
    fn collect_page(&self, html: &str, page: u32) -> Vec<JobRecord> {
        let document = Html::parse_document(html);
        let cards = self.locator.find_cards(&document);

        if cards.is_empty() {
            warn!("No job cards found on page {}", page + 1);
            return Vec::new();
        }

        cards
            .iter()
            .enumerate()
            .filter_map(|(index, card)| self.extractor.extract(*card, index))
            .collect()
    }
}
