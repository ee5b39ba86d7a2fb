//! TreeWalker - walks a directory, annotates matches and prunes the listing

use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::output::{
    Annotation, ERROR_OPENING_DIR, PERMISSION_DENIED, RECURSIVE_NOT_FOLLOWED, RenderedLine, Style,
    format_entry, format_notice,
};
use crate::search::{ContentMatcher, MatchResult, NameMatcher, PatternOptions};

use super::config::WalkerConfig;
use super::stats::Stats;
use super::traversal::{Entry, read_and_filter_entries};
use super::utils::{canonical_or_self, child_prefix, connector};

/// Lines and counts produced by walking one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    pub lines: Vec<RenderedLine>,
    /// Aggregate over the whole subtree, including pruned entries
    pub stats: Stats,
}

/// Depth-first tree walker. Patterns are compiled once, in [`TreeWalker::new`].
pub struct TreeWalker {
    config: WalkerConfig,
    name_matcher: Option<NameMatcher>,
    content_matcher: Option<ContentMatcher>,
}

impl TreeWalker {
    /// Fails only if a pattern does not compile (regex mode).
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let options = PatternOptions {
            is_regex: config.is_regex,
            ignore_case: config.ignore_case,
        };
        let name_matcher = config
            .name_search()
            .map(|pattern| NameMatcher::new(pattern, options))
            .transpose()?;
        let content_matcher = config
            .content_search()
            .map(|pattern| {
                ContentMatcher::new(pattern, options)
                    .map(|m| m.with_max_file_size(config.max_file_size))
            })
            .transpose()?;
        Ok(Self {
            config,
            name_matcher,
            content_matcher,
        })
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk everything below `root`. The root itself is not part of the listing.
    pub fn walk(&self, root: &Path) -> TreeListing {
        self.walk_dir(root, "", 0)
    }

    /// Walk `dir` as if it sat `depth` levels down, under `prefix`.
    pub fn walk_dir(&self, dir: &Path, prefix: &str, depth: usize) -> TreeListing {
        let mut ancestors = vec![canonical_or_self(dir)];
        self.walk_frame(dir, prefix, depth, &mut ancestors)
    }

    /// `ancestors` holds the canonical paths of `dir` and every directory
    /// above it on the current descent, for symlink cycle detection.
    fn walk_frame(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
    ) -> TreeListing {
        let mut listing = TreeListing::default();

        if self.config.at_max_depth(depth) {
            return listing;
        }

        let entries = match read_and_filter_entries(dir, &self.config) {
            Ok(entries) => entries,
            Err(e) => {
                let notice = if e.kind() == io::ErrorKind::PermissionDenied {
                    log::debug!("permission denied: {}", dir.display());
                    PERMISSION_DENIED
                } else {
                    log::warn!("cannot read {}: {}", dir.display(), e);
                    ERROR_OPENING_DIR
                };
                listing.lines.push(format_notice(prefix, notice));
                return listing;
            }
        };

        let search_active = self.config.search_active();
        let total = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == total;
            let annotation = self.annotate(entry);
            listing.stats.record_entry(
                entry.is_dir,
                annotation.name_matched,
                annotation.content.is_match(),
            );

            let mut line = RenderedLine::new();
            line.push(prefix).push(connector(is_last)).append(format_entry(
                &entry.name,
                entry.is_dir,
                &annotation,
                search_active,
            ));

            if !entry.is_dir {
                if !self.config.matches_only || annotation.is_match() {
                    listing.lines.push(line);
                }
                continue;
            }

            let sub = if self.config.at_max_depth(depth + 1) {
                TreeListing::default()
            } else if let Some(target) = self.descent_target(entry, ancestors) {
                ancestors.push(target);
                let sub = self.walk_frame(
                    &entry.path,
                    &child_prefix(prefix, is_last),
                    depth + 1,
                    ancestors,
                );
                ancestors.pop();
                sub
            } else {
                log::debug!("not following {}: symlink cycle", entry.path.display());
                line.push(" ").push_styled(RECURSIVE_NOT_FOLLOWED, Style::Dimmed);
                TreeListing::default()
            };

            let visible =
                !self.config.matches_only || annotation.name_matched || sub.stats.has_matches();
            listing.stats += sub.stats;
            if visible {
                listing.lines.push(line);
                listing.lines.extend(sub.lines);
            }
        }

        listing
    }

    fn annotate(&self, entry: &Entry) -> Annotation {
        let name_matched = self
            .name_matcher
            .as_ref()
            .is_some_and(|m| m.is_match(&entry.name));
        let content = match &self.content_matcher {
            Some(matcher) if !entry.is_dir => matcher.evaluate(&entry.path),
            _ => MatchResult::default(),
        };
        Annotation {
            name_matched,
            content,
        }
    }

    /// Canonical path of a directory entry, or None if descending into it
    /// would revisit a directory already on the current path.
    fn descent_target(&self, entry: &Entry, ancestors: &[PathBuf]) -> Option<PathBuf> {
        let target = match (entry.is_symlink, ancestors.last(), entry.path.file_name()) {
            (false, Some(parent), Some(name)) => parent.join(name),
            _ => canonical_or_self(&entry.path),
        };
        if ancestors.contains(&target) {
            None
        } else {
            Some(target)
        }
    }
}
