//! Job record entity and the per-field extraction result.

use serde::{Deserialize, Serialize};

/// Outcome of extracting a single card field.
///
/// Keeps "the element was there" and "we substituted a placeholder"
/// distinguishable until the record is assembled; both collapse to plain
/// text at that boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Trimmed text content of the located element.
    Present(String),
    /// The expected element was absent; carries the field's placeholder.
    Defaulted(&'static str),
}

impl FieldValue {
    /// Collapse to the flat text stored on the record.
    pub fn into_text(self) -> String {
        match self {
            Self::Present(text) => text,
            Self::Defaulted(placeholder) => placeholder.to_string(),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// One scraped job posting.
///
/// Every text field is always populated, either with real card text or a
/// field-specific placeholder. `detail_link` is the one exception: it is
/// the empty string when the card carried no identifier attribute, so
/// downstream consumers can detect "no detail page available" by emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub posted: String,
    pub snippet: String,
    pub detail_link: String,
    /// Vocabulary terms found in the snippet, in vocabulary order.
    /// Filled in by the skill-tagging pass after accumulation.
    pub skills: Vec<String>,
}
