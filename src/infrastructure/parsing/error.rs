//! Error types for HTML parsing operations.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Job card {index} could not be read: {reason}")]
    CardUnreadable { index: usize, reason: String },
}

impl ParseError {
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn card_unreadable(index: usize, reason: impl ToString) -> Self {
        Self::CardUnreadable {
            index,
            reason: reason.to_string(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
