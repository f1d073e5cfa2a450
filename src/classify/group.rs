//! (date, category) grouping
//!
//! Partitions classified commits by date, then by category within each
//! date, and emits groups ordered most-recent-date first.

use crate::model::{ClassifiedCommit, CommitGroup, GroupEntry};

/// Prefix for sequential group identifiers ("group-1", "group-2", ...)
const GROUP_ID_PREFIX: &str = "group-";

/// Group classified commits into one [`CommitGroup`] per populated
/// (date, category) combination.
///
/// Ordering rules:
/// - groups sorted by date descending (most recent first)
/// - categories within a date keep first-occurrence order
/// - commits within a category keep insertion order
/// - ids are assigned sequentially in emission order
pub fn group_commits(commits: Vec<ClassifiedCommit>) -> Vec<CommitGroup> {
    // date -> (category -> commits), all in first-occurrence order
    let mut dates: Vec<(String, Vec<(&'static str, Vec<GroupEntry>)>)> = Vec::new();

    for commit in commits {
        let date_pos = match dates.iter().position(|(date, _)| *date == commit.date) {
            Some(pos) => pos,
            None => {
                dates.push((commit.date.clone(), Vec::new()));
                dates.len() - 1
            }
        };

        let categories = &mut dates[date_pos].1;
        let entry = GroupEntry {
            author: commit.author,
            message: commit.message,
        };

        match categories
            .iter_mut()
            .find(|(title, _)| *title == commit.category)
        {
            Some((_, entries)) => entries.push(entry),
            None => categories.push((commit.category, vec![entry])),
        }
    }

    // YYYY-MM-DD compares lexicographically, so string order is date order
    dates.sort_by(|(a, _), (b, _)| b.cmp(a));

    let mut groups = Vec::new();
    for (date, categories) in dates {
        for (title, entries) in categories {
            groups.push(CommitGroup {
                id: format!("{}{}", GROUP_ID_PREFIX, groups.len() + 1),
                title,
                date: date.clone(),
                commits: entries,
            });
        }
    }

    groups
}
