//! End-of-run frequency report: top job titles and top skills.

use std::collections::HashMap;
use tracing::info;

use crate::domain::job::JobRecord;

/// Count occurrences and return `(value, count)` pairs, highest count
/// first; ties break alphabetically for stable output.
pub fn top_counts<'a, I>(values: I, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Log the top titles and top skills across all accumulated records.
pub fn print_summary(records: &[JobRecord], limit: usize) {
    if records.is_empty() {
        info!("No records to summarize");
        return;
    }

    info!("Top {} job titles:", limit);
    for (title, count) in top_counts(records.iter().map(|r| r.title.as_str()), limit) {
        info!("  {}: {}", title, count);
    }

    info!("Top {} skills:", limit);
    let skills = records
        .iter()
        .flat_map(|r| r.skills.iter().map(|s| s.as_str()));
    for (skill, count) in top_counts(skills, limit) {
        info!("  {}: {}", skill, count);
    }
}
