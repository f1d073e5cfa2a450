//! CSV export
//!
//! Serializes grouped or flat pipeline output to a CSV file. UTF-8,
//! standard quoting, overwrites any existing file at the path. I/O
//! failures are surfaced to the caller, never swallowed.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::classify::PipelineOutput;
use crate::model::{ClassifiedCommit, CommitGroup};

/// Header for grouped exports (one row per commit, flattened from its group)
pub const GROUPED_HEADER: &[&str] = &["Group Title", "Group Date", "Author", "Commit Message"];

/// Header for flat exports (one numbered row per commit)
pub const FLAT_HEADER: &[&str] = &["S.No.", "Group Title", "Group Date", "Commit Message"];

/// Errors that can occur while writing a CSV file
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Export either pipeline shape to `path`; returns the number of data rows
pub fn write_csv(output: &PipelineOutput, path: &Path) -> Result<usize, ExportError> {
    match output {
        PipelineOutput::Grouped(groups) => write_grouped_csv(groups, path),
        PipelineOutput::Flat(commits) => write_flat_csv(commits, path),
    }
}

/// Write grouped output: groups flattened back to one row per commit
pub fn write_grouped_csv(groups: &[CommitGroup], path: &Path) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(GROUPED_HEADER)?;

    let mut rows = 0;
    for group in groups {
        for entry in &group.commits {
            writer.write_record([
                group.title,
                group.date.as_str(),
                entry.author.as_str(),
                entry.message.as_str(),
            ])?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

/// Write flat output: one numbered row per commit, in order
pub fn write_flat_csv(commits: &[ClassifiedCommit], path: &Path) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(FLAT_HEADER)?;

    for (index, commit) in commits.iter().enumerate() {
        let serial = (index + 1).to_string();
        writer.write_record([
            serial.as_str(),
            commit.category,
            commit.date.as_str(),
            commit.message.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(commits.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupEntry;

    fn sample_groups() -> Vec<CommitGroup> {
        vec![
            CommitGroup {
                id: "group-1".to_string(),
                title: "Bug Fixes",
                date: "2024-03-01".to_string(),
                commits: vec![
                    GroupEntry {
                        author: "Jane Doe".to_string(),
                        message: "fix: resolve login crash".to_string(),
                    },
                    GroupEntry {
                        author: "Bob".to_string(),
                        message: "fix: off-by-one, again".to_string(),
                    },
                ],
            },
            CommitGroup {
                id: "group-2".to_string(),
                title: "Features",
                date: "2024-02-28".to_string(),
                commits: vec![GroupEntry {
                    author: "Jane Doe".to_string(),
                    message: "feat: add \"quick export\"".to_string(),
                }],
            },
        ]
    }

    #[test]
    fn test_grouped_csv_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grouped.csv");

        let rows = write_grouped_csv(&sample_groups(), &path).unwrap();
        assert_eq!(rows, 3);

        // Header + one line per commit
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 4);
        assert!(content.starts_with("Group Title,Group Date,Author,Commit Message"));
    }

    #[test]
    fn test_grouped_csv_quotes_special_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grouped.csv");
        write_grouped_csv(&sample_groups(), &path).unwrap();

        // Fields with commas/quotes must round-trip through a CSV reader
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records[1].get(3), Some("fix: off-by-one, again"));
        assert_eq!(records[2].get(3), Some("feat: add \"quick export\""));
    }

    #[test]
    fn test_flat_csv_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.csv");

        let commits = vec![
            ClassifiedCommit {
                category: "Bug Fixes",
                date: "2024-03-01".to_string(),
                author: "Jane".to_string(),
                message: "fix: crash".to_string(),
            },
            ClassifiedCommit {
                category: "Features",
                date: "2024-03-01".to_string(),
                author: "Bob".to_string(),
                message: "feat: add widget".to_string(),
            },
        ];

        let rows = write_flat_csv(&commits, &path).unwrap();
        assert_eq!(rows, 2);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records[0].get(0), Some("1"));
        assert_eq!(records[1].get(0), Some("2"));
        assert_eq!(records[1].get(1), Some("Features"));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "old content that should disappear").unwrap();

        write_grouped_csv(&sample_groups(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old content"));
    }

    #[test]
    fn test_export_invalid_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.csv");

        let result = write_grouped_csv(&sample_groups(), &path);
        assert!(result.is_err());
    }
}
