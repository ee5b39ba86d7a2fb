//! Reading, filtering and ordering the children of one directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::WalkerConfig;

/// One child of a directory, read fresh on every traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// True for directories and for symlinks that resolve to one
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl Entry {
    fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let file_type = entry.file_type().ok();
        let is_symlink = file_type.is_some_and(|t| t.is_symlink());
        // Follow symlinks; a dangling link is listed as a file
        let is_dir = if is_symlink {
            path.is_dir()
        } else {
            file_type.is_some_and(|t| t.is_dir())
        };
        Self {
            name,
            path,
            is_dir,
            is_symlink,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// List, filter and sort the children of `path`.
///
/// Fails only if the directory itself cannot be opened; unreadable
/// individual entries are skipped.
pub fn read_and_filter_entries(path: &Path, config: &WalkerConfig) -> io::Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = fs::read_dir(path)?
        .filter_map(|entry| match entry {
            Ok(e) => Some(Entry::from_dir_entry(&e)),
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {}", path.display(), e);
                None
            }
        })
        .filter(|entry| is_included(entry, config))
        .collect();
    sort_entries(&mut entries);
    Ok(entries)
}

/// Apply the hidden-file and directories-only filters.
pub fn is_included(entry: &Entry, config: &WalkerConfig) -> bool {
    if entry.is_hidden() && !config.show_hidden {
        return false;
    }
    !config.dirs_only || entry.is_dir
}

/// Directories first, then files; each group case-insensitively by name.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_cached_key(|e| (!e.is_dir, e.name.to_lowercase(), e.name.clone()));
}
