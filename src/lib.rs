//! Canopy - a tree command that finds where a keyword lives

pub mod error;
pub mod output;
pub mod search;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{OutputConfig, RenderedLine, SummaryModes, Theme, TreeFormatter};
pub use search::{ContentMatcher, MatchResult, NameMatcher, PatternOptions, Snippet, search_file};
pub use tree::{Stats, TreeListing, TreeWalker, WalkerConfig, resolve_root};
