//! Directory tree walking logic
//!
//! The walker reads each directory fully, sorts it, annotates every entry
//! with name and content matches, recurses into subdirectories and merges
//! their counts on the way back up. In matches-only mode it drops lines
//! for entries (and whole subtrees) without matches, but still counts them.

mod config;
mod stats;
mod traversal;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use stats::Stats;
pub use traversal::{Entry, is_included, read_and_filter_entries, sort_entries};
pub use utils::{BRANCH, LAST_BRANCH, PIPE, SPACE, child_prefix, connector, resolve_root};
pub use walker::{TreeListing, TreeWalker};
