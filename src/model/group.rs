//! Commit group model

/// One commit inside a group (the group already carries date and category)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    /// Commit author name
    pub author: String,

    /// Commit message
    pub message: String,
}

/// A bucket of commits sharing the same date and category.
///
/// Groups are uniquely identified by (date, title) and carry a sequential
/// human-readable id (`group-1`, `group-2`, ...) assigned in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitGroup {
    /// Sequential identifier in emission order
    pub id: String,

    /// Category label shared by all commits in this group
    pub title: &'static str,

    /// Calendar date in `YYYY-MM-DD` form shared by all commits
    pub date: String,

    /// Commits in insertion order
    pub commits: Vec<GroupEntry>,
}

impl CommitGroup {
    /// Number of commits in this group
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// True when the group carries no commits
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_is_empty() {
        let group = CommitGroup {
            id: "group-1".to_string(),
            title: "Bug Fixes",
            date: "2024-03-01".to_string(),
            commits: vec![GroupEntry {
                author: "Jane Doe".to_string(),
                message: "fix: resolve login crash".to_string(),
            }],
        };
        assert_eq!(group.len(), 1);
        assert!(!group.is_empty());
    }
}
