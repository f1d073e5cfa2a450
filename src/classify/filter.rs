//! Noise filter for parsed commits
//!
//! Drops bot commits, merge commits, and infrastructure noise before
//! classification. Applied only when the pipeline's filter flag is on.

use crate::model::CommitRecord;

/// Author names always treated as noise (compared case-insensitively)
pub const BOT_AUTHORS: &[&str] = &["github-actions[bot]"];

/// Messages containing any of these substrings are treated as noise
/// (repository-hosting names, CI artifact names, generic infra terms)
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    "github",
    "commit",
    "branch",
    "readme",
    "__pycache__",
    "yml",
    "pyinstaller",
];

/// Merge-commit convention: messages starting with this are dropped
const MERGE_PREFIX: &str = "merge ";

/// Decide whether a record is noise
pub fn is_noise(record: &CommitRecord) -> bool {
    let author = record.author.trim().to_lowercase();
    if BOT_AUTHORS.contains(&author.as_str()) {
        return true;
    }

    let message = record.message.to_lowercase();
    message.starts_with(MERGE_PREFIX)
        || EXCLUDE_KEYWORDS
            .iter()
            .any(|keyword| message.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, message: &str) -> CommitRecord {
        CommitRecord {
            author: author.to_string(),
            date: "2024-03-01".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_bot_author_is_noise() {
        assert!(is_noise(&record("github-actions[bot]", "fix: bump deps")));
        // Case-insensitive, trimmed comparison
        assert!(is_noise(&record("  GitHub-Actions[bot] ", "fix: bump deps")));
    }

    #[test]
    fn test_merge_commit_is_noise() {
        assert!(is_noise(&record("Jane", "Merge pull request #42")));
        assert!(is_noise(&record("Jane", "merge main into feature")));
    }

    #[test]
    fn test_merge_needs_trailing_space() {
        // "merged" does not match the "merge " prefix convention
        assert!(!is_noise(&record("Jane", "merged-files cleanup tool")));
    }

    #[test]
    fn test_exclusion_keywords_are_noise() {
        assert!(is_noise(&record("Jane", "update README")));
        assert!(is_noise(&record("Jane", "tweak ci.yml")));
        assert!(is_noise(&record("Jane", "initial commit")));
    }

    #[test]
    fn test_regular_commit_passes() {
        assert!(!is_noise(&record("Jane", "fix: resolve login crash")));
        assert!(!is_noise(&record("Bob", "feat: implement dashboard")));
    }
}
