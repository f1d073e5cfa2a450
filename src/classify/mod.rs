//! Commit classification and grouping
//!
//! The core text-to-structured-data transform: keyword-based category
//! assignment, optional noise filtering, and (date, category) grouping.

mod filter;
mod group;

pub use filter::{BOT_AUTHORS, EXCLUDE_KEYWORDS, is_noise};
pub use group::group_commits;

use crate::git::parser;
use crate::model::{ClassifiedCommit, CommitGroup, CommitRecord};

/// Ordered (label, keywords) category table.
///
/// Matching is case-insensitive substring search; the first category with
/// any hit wins, so order is a tie-break policy, not arbitrary. Specific
/// categories come before generic ones: "fix: resolve login crash" lands
/// in Bug Fixes even though "login" also appears in the auth keywords.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("Bug Fixes", &["fix", "bug", "resolve", "issue", "hotfix"]),
    (
        "Authentication & Users",
        &[
            "auth", "user", "login", "password", "register", "profile", "license",
        ],
    ),
    ("Documentation", &["docs", "documentation"]),
    ("Testing", &["test", "spec", "snapshot"]),
    // Bare "ci"/"cd" would substring-match words like "dependencies",
    // so the CI tokens carry their conventional-commit punctuation
    ("Build & CI/CD", &["build", "ci:", "ci/cd", "deploy", "release"]),
    ("Refactoring & Style", &["refactor", "style", "cleanup", "lint"]),
    ("Features", &["feat", "implement", "add", "create", "added"]),
];

/// Label assigned when no keyword matches
pub const FALLBACK_CATEGORY: &str = "Features";

/// Runtime switches for the parse -> filter -> classify -> group pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Drop bot authors, merge commits, and noise-keyword messages
    pub noise_filter: bool,
    /// Group by (date, category) instead of one flat row per commit
    pub grouped: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            noise_filter: true,
            grouped: true,
        }
    }
}

/// Output of the pipeline in one of its two shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutput {
    /// One group per populated (date, category), date-descending
    Grouped(Vec<CommitGroup>),
    /// One classified commit per surviving line, in input order
    Flat(Vec<ClassifiedCommit>),
}

impl PipelineOutput {
    /// Total number of commits across the output
    pub fn commit_count(&self) -> usize {
        match self {
            PipelineOutput::Grouped(groups) => groups.iter().map(CommitGroup::len).sum(),
            PipelineOutput::Flat(commits) => commits.len(),
        }
    }

    /// True when no commit survived parsing and filtering
    pub fn is_empty(&self) -> bool {
        self.commit_count() == 0
    }
}

/// Assign a category label to a commit message
///
/// First matching category in table order wins; unmatched messages fall
/// back to [`FALLBACK_CATEGORY`].
pub fn classify(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    for (label, keywords) in CATEGORIES.iter().copied() {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return label;
        }
    }
    FALLBACK_CATEGORY
}

/// Attach category labels to parsed records, preserving order
pub fn classify_commits(records: Vec<CommitRecord>) -> Vec<ClassifiedCommit> {
    records
        .into_iter()
        .map(|record| ClassifiedCommit {
            category: classify(&record.message),
            date: record.date,
            author: record.author,
            message: record.message,
        })
        .collect()
}

/// Run the whole pipeline over raw log text
///
/// Never fails: malformed lines are skipped and empty input produces an
/// empty output, which the caller surfaces as "nothing to show".
pub fn run_pipeline(raw: &str, options: PipelineOptions) -> PipelineOutput {
    let mut records = parser::parse_log(raw);

    if options.noise_filter {
        records.retain(|record| !is_noise(record));
    }

    let classified = classify_commits(records);

    if options.grouped {
        PipelineOutput::Grouped(group_commits(classified))
    } else {
        PipelineOutput::Flat(classified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_fix_wins_over_login() {
        // "fix" (Bug Fixes) must win over "login" (Authentication & Users)
        assert_eq!(classify("fix: resolve login crash"), "Bug Fixes");
    }

    #[test]
    fn test_classify_auth_without_fix_keywords() {
        assert_eq!(classify("login form validation"), "Authentication & Users");
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify("update dependencies"), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_classify_ci_needs_punctuation() {
        assert_eq!(classify("ci: cache cargo registry"), "Build & CI/CD");
        // Bare "ci" inside a word never matches
        assert_eq!(classify("update dependencies list"), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify("FIX: Crash on startup"), "Bug Fixes");
        assert_eq!(classify("Refactor the renderer"), "Refactoring & Style");
    }

    #[test]
    fn test_classify_first_match_wins_within_order() {
        // "docs" before "test" in the table: a message with both goes to Documentation
        assert_eq!(classify("docs: describe test setup"), "Documentation");
    }

    #[test]
    fn test_fallback_is_a_real_category() {
        assert!(
            CATEGORIES
                .iter()
                .any(|(label, _)| *label == FALLBACK_CATEGORY)
        );
    }

    #[test]
    fn test_run_pipeline_grouped_counts() {
        let raw = "\
Jane | 2024-03-01T10:00:00Z | fix: resolve login crash
Bob | 2024-03-01T11:00:00Z | feat: implement dashboard
Jane | 2024-02-28T09:00:00Z | fix: null pointer on save";

        let output = run_pipeline(raw, PipelineOptions::default());
        assert_eq!(output.commit_count(), 3);

        let PipelineOutput::Grouped(groups) = output else {
            panic!("expected grouped output");
        };
        assert_eq!(groups.len(), 3);
        // Most recent date first
        assert_eq!(groups[0].date, "2024-03-01");
        assert_eq!(groups[2].date, "2024-02-28");
    }

    #[test]
    fn test_run_pipeline_flat_preserves_order() {
        let raw = "\
Jane | 2024-02-28T10:00:00Z | fix: crash
Bob | 2024-03-01T11:00:00Z | feat: implement dashboard";

        let options = PipelineOptions {
            grouped: false,
            ..PipelineOptions::default()
        };
        let PipelineOutput::Flat(commits) = run_pipeline(raw, options) else {
            panic!("expected flat output");
        };
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].author, "Jane");
        assert_eq!(commits[0].category, "Bug Fixes");
        assert_eq!(commits[1].author, "Bob");
    }

    #[test]
    fn test_run_pipeline_filter_toggle() {
        let raw = "\
github-actions[bot] | 2024-03-01T10:00:00Z | chore: bump version
Jane | 2024-03-01T11:00:00Z | Merge pull request #42
Bob | 2024-03-01T12:00:00Z | fix: crash on resize";

        let filtered = run_pipeline(raw, PipelineOptions::default());
        assert_eq!(filtered.commit_count(), 1);

        let unfiltered = run_pipeline(
            raw,
            PipelineOptions {
                noise_filter: false,
                ..PipelineOptions::default()
            },
        );
        assert_eq!(unfiltered.commit_count(), 3);
    }

    #[test]
    fn test_run_pipeline_empty_input() {
        let output = run_pipeline("  \n ", PipelineOptions::default());
        assert!(output.is_empty());
    }
}
