//! Commit record models

/// One parsed log entry: author, normalized date, message.
///
/// Built from a raw `author | ISO-8601 date | message` line. The date has
/// already been validated and reduced to a calendar date by the parser;
/// a record never carries an unparsed or partial date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitRecord {
    /// Commit author name, trimmed
    pub author: String,

    /// Calendar date in `YYYY-MM-DD` form (time-of-day and offset dropped)
    pub date: String,

    /// Commit message, trimmed (may itself contain `|` characters)
    pub message: String,
}

impl CommitRecord {
    /// Reconstruct the raw log line this record was parsed from
    pub fn to_log_line(&self) -> String {
        format!("{} | {} | {}", self.author, self.date, self.message)
    }
}

/// A commit record with its assigned category label.
///
/// The label always comes from the fixed category table or the fallback,
/// so it can be a `&'static str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    /// Category label (table entry or fallback)
    pub category: &'static str,

    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,

    /// Commit author name
    pub author: String,

    /// Commit message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CommitRecord {
        CommitRecord {
            author: "Jane Doe".to_string(),
            date: "2024-03-01".to_string(),
            message: "fix: resolve login crash".to_string(),
        }
    }

    #[test]
    fn test_to_log_line() {
        let record = sample_record();
        assert_eq!(
            record.to_log_line(),
            "Jane Doe | 2024-03-01 | fix: resolve login crash"
        );
    }

    #[test]
    fn test_default_is_empty() {
        let record = CommitRecord::default();
        assert!(record.author.is_empty());
        assert!(record.date.is_empty());
        assert!(record.message.is_empty());
    }
}
