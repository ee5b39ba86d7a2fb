//! Per-subtree tallies

use std::ops::AddAssign;

/// Counts for a directory's whole subtree.
///
/// Pruned entries still count: hiding a line in matches-only mode never
/// changes these numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub dirs: usize,
    pub files: usize,
    pub name_matches: usize,
    /// Files with at least one content match (not the total number of hits)
    pub content_matches: usize,
}

impl Stats {
    /// Tally one direct child of the current directory.
    pub fn record_entry(&mut self, is_dir: bool, name_matched: bool, content_matched: bool) {
        if is_dir {
            self.dirs += 1;
        } else {
            self.files += 1;
        }
        if name_matched {
            self.name_matches += 1;
        }
        if content_matched {
            self.content_matches += 1;
        }
    }

    pub fn has_matches(&self) -> bool {
        self.name_matches > 0 || self.content_matches > 0
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.dirs += other.dirs;
        self.files += other.files;
        self.name_matches += other.name_matches;
        self.content_matches += other.content_matches;
    }
}
