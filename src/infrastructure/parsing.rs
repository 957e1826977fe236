//! HTML parsing infrastructure: card location and record extraction.
//!
//! Selector-driven, with multi-fallback strategies and error handling that
//! keeps a bad card or a markerless page from aborting anything.

pub mod card_locator;
pub mod error;
pub mod record_extractor;
pub mod selectors;

pub use card_locator::CardLocator;
pub use error::{ParseError, ParseResult};
pub use record_extractor::RecordExtractor;
pub use selectors::{CardSelectors, FieldSelectors};
