//! Configuration types for the tree walker

/// Configuration for tree walking and search behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include entries whose name starts with a dot
    pub show_hidden: bool,
    pub dirs_only: bool,
    /// None = unbounded, 0 = root only
    pub max_depth: Option<usize>,
    /// Pattern searched for in file contents
    pub search_pattern: Option<String>,
    /// Pattern searched for in entry names
    pub name_pattern: Option<String>,
    /// Treat both patterns as regular expressions
    pub is_regex: bool,
    pub ignore_case: bool,
    /// Only show entries that matched, plus the directories leading to them
    pub matches_only: bool,
    /// Files larger than this many bytes are not content-searched
    pub max_file_size: Option<u64>,
}

impl WalkerConfig {
    /// Content search pattern, if one is set and non-empty.
    pub fn content_search(&self) -> Option<&str> {
        self.search_pattern.as_deref().filter(|p| !p.is_empty())
    }

    /// Name search pattern, if one is set and non-empty.
    pub fn name_search(&self) -> Option<&str> {
        self.name_pattern.as_deref().filter(|p| !p.is_empty())
    }

    /// True when either kind of search is active.
    pub fn search_active(&self) -> bool {
        self.content_search().is_some() || self.name_search().is_some()
    }

    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
