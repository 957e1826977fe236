//! Flat-file export of the accumulated record table.
//!
//! CSV columns match the downstream tabulation step; the skills column
//! renders as a comma-joined list or the literal `None` when empty.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::domain::job::JobRecord;

/// Column order of the exported table.
pub const CSV_COLUMNS: [&str; 8] = [
    "Title",
    "Company",
    "Location",
    "Salary",
    "Posted",
    "Snippet",
    "Skills",
    "Detail_Link",
];

/// Write the record table to `path` as CSV.
pub fn write_csv(records: &[JobRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file {:?}", path))?;

    writer
        .write_record(CSV_COLUMNS)
        .context("Failed to write CSV header")?;

    for record in records {
        let skills = skills_cell(&record.skills);
        writer
            .write_record([
                record.title.as_str(),
                record.company.as_str(),
                record.location.as_str(),
                record.salary.as_str(),
                record.posted.as_str(),
                record.snippet.as_str(),
                skills.as_str(),
                record.detail_link.as_str(),
            ])
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    info!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}

/// Render the skills column: joined list, or `None` when empty.
pub fn skills_cell(skills: &[String]) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.join(", ")
    }
}

/// First `limit` records pretty-printed as JSON for inspection.
pub fn sample_json(records: &[JobRecord], limit: usize) -> Result<String> {
    let sample = &records[..limit.min(records.len())];
    serde_json::to_string_pretty(sample).context("Failed to serialize record sample")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(title: &str, skills: &[&str]) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            company: "Acme Corp".to_string(),
            location: "New York, NY".to_string(),
            salary: "Salary not specified".to_string(),
            posted: "Posted today".to_string(),
            snippet: "Reporting, dashboards".to_string(),
            detail_link: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn skills_cell_joins_or_renders_none() {
        assert_eq!(skills_cell(&[]), "None");
        assert_eq!(
            skills_cell(&["sql".to_string(), "python".to_string()]),
            "sql, python"
        );
    }

    #[test]
    fn csv_has_header_and_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.csv");
        let records = vec![record("Data Analyst", &["sql"]), record("BI Developer", &[])];

        write_csv(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Title,Company,Location,Salary,Posted,Snippet,Skills,Detail_Link"
        );
        assert!(lines[1].contains("Data Analyst"));
        assert!(lines[2].contains("None"));
    }

    #[test]
    fn sample_is_capped_at_record_count() {
        let records = vec![record("Data Analyst", &["sql"])];
        let json = sample_json(&records, 3).unwrap();
        let parsed: Vec<JobRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
