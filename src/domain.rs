//! Domain layer: job records, skill tagging and process-wide constants.

pub mod constants;
pub mod job;
pub mod skills;

pub use job::{FieldValue, JobRecord};
pub use skills::SkillTagger;
