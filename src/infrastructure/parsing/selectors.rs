//! CSS selector configuration for the job-board markup.
//!
//! Defaults target Indeed's result pages; everything is serde-visible so a
//! config file can swap markers without code changes when the site's
//! markup shifts.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{ParseError, ParseResult};

/// Structural markers used to locate job cards on a result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSelectors {
    /// Current job-card marker.
    pub primary_card: String,

    /// Older job-card marker still present on some result variants.
    pub legacy_card: String,

    /// Job-title marker, used to walk up to card containers as a fallback.
    pub title_marker: String,

    /// Company-name marker, the last-resort container fallback.
    pub company_marker: String,
}

impl Default for CardSelectors {
    fn default() -> Self {
        Self {
            primary_card: "div.job_seen_beacon".to_string(),
            legacy_card: "div.jobsearch-SerpJobCard".to_string(),
            title_marker: "h2.jobTitle".to_string(),
            company_marker: "span.companyName".to_string(),
        }
    }
}

/// Per-field markers inside one job card, with fallbacks in priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSelectors {
    pub title: Vec<String>,
    pub company: Vec<String>,
    pub location: Vec<String>,
    pub salary: Vec<String>,
    pub posted: Vec<String>,
    pub snippet: Vec<String>,
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            title: vec!["h2.jobTitle".to_string(), "h2.title".to_string()],
            company: vec!["span.companyName".to_string(), "span.company".to_string()],
            location: vec![
                "div.companyLocation".to_string(),
                "div.location".to_string(),
            ],
            salary: vec![
                "div.salary-snippet-container".to_string(),
                "span.salaryText".to_string(),
            ],
            posted: vec!["span.date".to_string()],
            snippet: vec!["div.job-snippet".to_string(), "div.summary".to_string()],
        }
    }
}

/// Compile one selector string.
pub(crate) fn compile_selector(selector: &str) -> ParseResult<Selector> {
    Selector::parse(selector).map_err(|e| ParseError::invalid_selector(selector, e))
}

/// Compile a fallback list, skipping (and logging) invalid entries.
///
/// Fails only when nothing in the list compiles, mirroring the "some
/// fallback must exist" requirement.
pub(crate) fn compile_selectors(selector_strings: &[String]) -> ParseResult<Vec<Selector>> {
    let mut selectors = Vec::new();

    for selector_str in selector_strings {
        match Selector::parse(selector_str) {
            Ok(selector) => selectors.push(selector),
            Err(e) => warn!("Failed to compile selector '{}': {}", selector_str, e),
        }
    }

    if selectors.is_empty() {
        return Err(ParseError::invalid_selector(
            &selector_strings.join(", "),
            "no valid selectors in fallback list",
        ));
    }

    Ok(selectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selectors_all_compile() {
        let cards = CardSelectors::default();
        assert!(compile_selector(&cards.primary_card).is_ok());
        assert!(compile_selector(&cards.legacy_card).is_ok());
        assert!(compile_selector(&cards.title_marker).is_ok());
        assert!(compile_selector(&cards.company_marker).is_ok());

        let fields = FieldSelectors::default();
        for list in [
            &fields.title,
            &fields.company,
            &fields.location,
            &fields.salary,
            &fields.posted,
            &fields.snippet,
        ] {
            assert!(compile_selectors(list).is_ok());
        }
    }

    #[test]
    fn invalid_entries_are_skipped_but_not_fatal() {
        let list = vec![":::garbage".to_string(), "div.ok".to_string()];
        assert_eq!(compile_selectors(&list).unwrap().len(), 1);
    }

    #[test]
    fn all_invalid_entries_fail_compilation() {
        let list = vec![":::garbage".to_string()];
        assert!(compile_selectors(&list).is_err());
    }
}
