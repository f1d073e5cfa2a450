//! Log output parser (git log)
//!
//! Parses `author | ISO-8601 date | message` lines into commit records.
//! Parsing is best-effort: malformed lines (too few fields, unparseable
//! date) are silently skipped, never surfaced as errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::constants::FIELD_SEPARATOR;
use crate::model::CommitRecord;

/// Output format for normalized calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Datetime formats accepted for the second field, tried in order after
/// RFC 3339. Covers git's iso8601-strict and iso dates (with and without
/// a colon in the offset), offset-less timestamps, and bare dates so that
/// re-parsing a normalized record round-trips.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse raw `git log` output into commit records
///
/// Lines that do not parse are dropped; empty or whitespace-only input
/// yields an empty list.
pub fn parse_log(raw: &str) -> Vec<CommitRecord> {
    raw.lines().filter_map(parse_line).collect()
}

/// Parse one `author | date | message` line
///
/// Only the first two `|` are structural: the rest of the line after the
/// second separator is the message, pipes included. Returns None for
/// lines with fewer than three fields or an unparseable date.
pub fn parse_line(line: &str) -> Option<CommitRecord> {
    let mut fields = line.splitn(3, FIELD_SEPARATOR);

    let author = fields.next()?.trim();
    let timestamp = fields.next()?.trim();
    let message = fields.next()?.trim();

    let date = normalize_date(timestamp)?;

    Some(CommitRecord {
        author: author.to_string(),
        date,
        message: message.to_string(),
    })
}

/// Reduce an ISO-8601 timestamp to a `YYYY-MM-DD` calendar date
///
/// Time-of-day and timezone offset are discarded, not converted: the
/// calendar date is taken as written by the author's clock.
fn normalize_date(timestamp: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.date_naive().format(DATE_FORMAT).to_string());
    }

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(timestamp, fmt) {
            return Some(dt.date_naive().format(DATE_FORMAT).to_string());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, fmt) {
            return Some(dt.date().format(DATE_FORMAT).to_string());
        }
    }

    NaiveDate::parse_from_str(timestamp, DATE_FORMAT)
        .ok()
        .map(|d| d.format(DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let record =
            parse_line("Jane Doe | 2024-03-01T10:00:00+0000 | fix: resolve login crash").unwrap();
        assert_eq!(record.author, "Jane Doe");
        assert_eq!(record.date, "2024-03-01");
        assert_eq!(record.message, "fix: resolve login crash");
    }

    #[test]
    fn test_parse_line_strict_iso_offset() {
        let record = parse_line("Jane | 2024-03-01T10:00:00+09:00 | feat: add widget").unwrap();
        assert_eq!(record.date, "2024-03-01");
    }

    #[test]
    fn test_parse_line_non_strict_iso() {
        // `--date=iso` (non-strict) puts spaces around the time
        let record = parse_line("Jane | 2024-03-01 10:00:00 +0000 | feat: add widget").unwrap();
        assert_eq!(record.date, "2024-03-01");
    }

    #[test]
    fn test_parse_line_message_keeps_pipes() {
        let record = parse_line("Jane | 2024-03-01T10:00:00Z | fix: a | b | c").unwrap();
        assert_eq!(record.message, "fix: a | b | c");
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        assert!(parse_line("Jane Doe | 2024-03-01T10:00:00Z").is_none());
        assert!(parse_line("just a plain line").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_parse_line_bad_date() {
        assert!(parse_line("Jane | yesterday | fix: crash").is_none());
        assert!(parse_line("Jane | 2024-13-99T99:99:99Z | fix: crash").is_none());
    }

    #[test]
    fn test_parse_line_idempotent_on_normalized_record() {
        let first =
            parse_line("Jane Doe | 2024-03-01T10:00:00+0000 | fix: resolve login crash").unwrap();
        let second = parse_line(&first.to_log_line()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_log_skips_bad_lines() {
        let raw = "\
Jane | 2024-03-01T10:00:00Z | fix: crash
not a log line
Bob | bad-date | feat: add thing
Alice | 2024-02-28T08:30:00+0100 | docs: update guide";

        let records = parse_log(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].author, "Jane");
        assert_eq!(records[1].author, "Alice");
        assert_eq!(records[1].date, "2024-02-28");
    }

    #[test]
    fn test_parse_log_empty_input() {
        assert!(parse_log("").is_empty());
        assert!(parse_log("   \n  \n").is_empty());
    }
}
