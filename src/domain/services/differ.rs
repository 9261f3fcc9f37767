//! Line-level change summary between two versions of a generated file.
//!
//! Used when an output file is replaced, to log how much of it changed.

use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub additions: usize,
    pub deletions: usize,
}

impl ChangeSummary {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }
}

impl std::fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{}, -{}", self.additions, self.deletions)
    }
}

/// Count inserted and deleted lines going from `old` to `new`.
pub fn summarize_changes(old: &str, new: &str) -> ChangeSummary {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .fold(ChangeSummary::default(), |mut summary, change| {
            match change.tag() {
                ChangeTag::Insert => summary.additions += 1,
                ChangeTag::Delete => summary.deletions += 1,
                ChangeTag::Equal => {}
            }
            summary
        })
}
