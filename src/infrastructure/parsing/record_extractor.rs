//! Structured field extraction from a single job card.
//!
//! Each field is located independently; a missing element becomes a
//! field-specific placeholder rather than a failure, so one bad marker
//! never blocks the rest of the card. Only a degenerate card (no text at
//! all) is dropped, and that never affects sibling cards.

use scraper::{ElementRef, Selector};
use tracing::warn;

use crate::domain::constants::{
    COMPANY_NOT_SPECIFIED, DATE_NOT_SPECIFIED, LOCATION_NOT_SPECIFIED, SALARY_NOT_SPECIFIED,
    SNIPPET_NOT_AVAILABLE, TITLE_NOT_FOUND,
};
use crate::domain::job::{FieldValue, JobRecord};
use crate::infrastructure::config::indeed;

use super::error::{ParseError, ParseResult};
use super::selectors::{compile_selectors, FieldSelectors};

/// Card-level attribute carrying the job identifier.
const JOB_KEY_ATTR: &str = "data-jk";

/// Pulls a [`JobRecord`] out of one card node.
pub struct RecordExtractor {
    title: Vec<Selector>,
    company: Vec<Selector>,
    location: Vec<Selector>,
    salary: Vec<Selector>,
    posted: Vec<Selector>,
    snippet: Vec<Selector>,
}

impl RecordExtractor {
    /// Extractor over the default field markers.
    pub fn new() -> ParseResult<Self> {
        Self::with_config(&FieldSelectors::default())
    }

    /// Extractor over custom field markers.
    pub fn with_config(config: &FieldSelectors) -> ParseResult<Self> {
        Ok(Self {
            title: compile_selectors(&config.title)?,
            company: compile_selectors(&config.company)?,
            location: compile_selectors(&config.location)?,
            salary: compile_selectors(&config.salary)?,
            posted: compile_selectors(&config.posted)?,
            snippet: compile_selectors(&config.snippet)?,
        })
    }

    /// Extract one card; `None` drops this card only.
    pub fn extract(&self, card: ElementRef<'_>, index: usize) -> Option<JobRecord> {
        match self.try_extract(card, index) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping card {}: {}", index, e);
                None
            }
        }
    }

    fn try_extract(&self, card: ElementRef<'_>, index: usize) -> ParseResult<JobRecord> {
        let card_text: String = card.text().collect();
        if card_text.trim().is_empty() {
            return Err(ParseError::card_unreadable(index, "card has no text content"));
        }

        // The detail link is derived from the card identifier, not from a
        // child element; a missing identifier means empty text, which is
        // deliberately distinguishable from the field placeholders.
        let detail_link = card
            .value()
            .attr(JOB_KEY_ATTR)
            .map(indeed::viewjob_url)
            .unwrap_or_default();

        Ok(JobRecord {
            title: field_text(card, &self.title, TITLE_NOT_FOUND).into_text(),
            company: field_text(card, &self.company, COMPANY_NOT_SPECIFIED).into_text(),
            location: field_text(card, &self.location, LOCATION_NOT_SPECIFIED).into_text(),
            salary: field_text(card, &self.salary, SALARY_NOT_SPECIFIED).into_text(),
            posted: field_text(card, &self.posted, DATE_NOT_SPECIFIED).into_text(),
            snippet: field_text(card, &self.snippet, SNIPPET_NOT_AVAILABLE).into_text(),
            detail_link,
            skills: Vec::new(),
        })
    }
}

/// First fallback selector yielding non-empty text wins; otherwise the
/// field's placeholder.
fn field_text(
    card: ElementRef<'_>,
    selectors: &[Selector],
    placeholder: &'static str,
) -> FieldValue {
    for selector in selectors {
        if let Some(element) = card.select(selector).next() {
            let text = collapse_whitespace(&element.text().collect::<String>());
            if !text.is_empty() {
                return FieldValue::Present(text);
            }
        }
    }
    FieldValue::Defaulted(placeholder)
}

/// Trim and normalize internal whitespace runs to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
