//! Multi-strategy job-card location.
//!
//! An ordered list of structural heuristics evaluated against the parsed
//! page; the first strategy producing any nodes wins and the rest are
//! skipped. All four coming up empty is a warning, not an error.

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, warn};

use super::error::ParseResult;
use super::selectors::{compile_selector, CardSelectors};

/// Locates the DOM nodes representing individual job postings.
pub struct CardLocator {
    primary: Selector,
    legacy: Selector,
    title_marker: Selector,
    company_marker: Selector,
}

impl CardLocator {
    /// Locator over the default markers.
    pub fn new() -> ParseResult<Self> {
        Self::with_config(&CardSelectors::default())
    }

    /// Locator over custom markers.
    pub fn with_config(config: &CardSelectors) -> ParseResult<Self> {
        Ok(Self {
            primary: compile_selector(&config.primary_card)?,
            legacy: compile_selector(&config.legacy_card)?,
            title_marker: compile_selector(&config.title_marker)?,
            company_marker: compile_selector(&config.company_marker)?,
        })
    }

    /// Job-card nodes of `document`, in document order; possibly empty.
    ///
    /// Strategy order:
    /// 1. primary card marker
    /// 2. legacy card marker
    /// 3. containers of title markers
    /// 4. containers of company markers
    pub fn find_cards<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        let direct = [("primary", &self.primary), ("legacy", &self.legacy)];
        for (strategy, selector) in direct {
            let cards: Vec<ElementRef<'a>> = document.select(selector).collect();
            if !cards.is_empty() {
                debug!("Found {} cards via {} marker", cards.len(), strategy);
                return cards;
            }
        }

        let walked = [
            ("title", &self.title_marker),
            ("company", &self.company_marker),
        ];
        for (strategy, selector) in walked {
            let cards = containers_of(document, selector);
            if !cards.is_empty() {
                debug!("Found {} cards via {} ancestor walk", cards.len(), strategy);
                return cards;
            }
        }

        warn!("No job cards found with any locator strategy");
        Vec::new()
    }
}

/// De-duplicated nearest container ancestors of every node matching
/// `selector`, in document order.
fn containers_of<'a>(document: &'a Html, selector: &Selector) -> Vec<ElementRef<'a>> {
    let mut seen = HashSet::new();
    let mut cards = Vec::new();

    for marker in document.select(selector) {
        if let Some(container) = nearest_container(marker) {
            if seen.insert(container.id()) {
                cards.push(container);
            }
        }
    }

    cards
}

/// Nearest `div` ancestor of a marker element.
fn nearest_container(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "div")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> CardLocator {
        CardLocator::new().unwrap()
    }

    #[test]
    fn primary_marker_wins_when_present() {
        let html = Html::parse_document(
            r#"<html><body>
                <div class="job_seen_beacon"><h2 class="jobTitle">Data Analyst</h2></div>
                <div class="job_seen_beacon"><h2 class="jobTitle">BI Developer</h2></div>
                <div class="jobsearch-SerpJobCard"><h2 class="jobTitle">Old Card</h2></div>
            </body></html>"#,
        );
        let cards = locator().find_cards(&html);
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn legacy_marker_used_when_no_primary_cards_exist() {
        let html = Html::parse_document(
            r#"<html><body>
                <div class="jobsearch-SerpJobCard"><h2 class="jobTitle">Data Analyst</h2></div>
                <div class="jobsearch-SerpJobCard"><h2 class="jobTitle">Data Engineer</h2></div>
            </body></html>"#,
        );
        let cards = locator().find_cards(&html);
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn title_ancestor_walk_deduplicates_shared_containers() {
        // Two titles inside one container must yield one card.
        let html = Html::parse_document(
            r#"<html><body>
                <div id="a"><h2 class="jobTitle">Analyst</h2><h2 class="jobTitle">Senior Analyst</h2></div>
                <div id="b"><h2 class="jobTitle">Engineer</h2></div>
            </body></html>"#,
        );
        let cards = locator().find_cards(&html);
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn company_markers_are_the_last_resort() {
        let html = Html::parse_document(
            r#"<html><body>
                <div><span class="companyName">Acme Corp</span></div>
            </body></html>"#,
        );
        let cards = locator().find_cards(&html);
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn markerless_page_yields_empty_without_panicking() {
        let html = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(locator().find_cards(&html).is_empty());
    }
}
