//! Name and content search
//!
//! - `pattern` - compiling user patterns (literal, comma-separated keywords, regex)
//! - `content` - scanning a file for matches and capturing a snippet

mod content;
mod pattern;

pub use content::{
    ContentMatcher, EXCLUDED_EXTENSIONS, MatchResult, Snippet, has_excluded_extension,
    is_binary_file, search_file,
};
pub use pattern::{NameMatcher, PatternOptions, compile, compile_content_patterns, split_keywords};
