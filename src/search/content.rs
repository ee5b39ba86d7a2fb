//! File content search
//!
//! Decides whether a file is worth scanning (extension, size and binary
//! checks), then counts every non-overlapping match line by line and keeps the
//! first hit as a snippet. Failures never escape: a file that cannot be read
//! simply has no matches.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use regex::Regex;

use super::pattern::{PatternOptions, compile_content_patterns};

/// Archive, disk image and library formats that are never scanned.
pub const EXCLUDED_EXTENSIONS: &[&str] = &[
    "gz", "zip", "tar", "rar", "7z", "bz2", "xz", "deb", "img", "iso", "vmdk", "dll", "ovf", "ova",
];

/// Number of leading bytes inspected for a null byte.
const BINARY_PROBE_LEN: u64 = 1024;

/// Maximum number of characters of the source line kept in a snippet.
const SNIPPET_WIDTH: usize = 50;

/// The first match in a file, with the line it appeared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub matched: String,
    /// Trimmed source line, truncated to 50 characters plus `...`.
    pub line: String,
}

impl Snippet {
    pub fn new(matched: &str, line: &str) -> Self {
        Self {
            matched: matched.to_string(),
            line: truncate_chars(line.trim(), SNIPPET_WIDTH),
        }
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "['{}' => '{}']", self.matched, self.line)
    }
}

/// Outcome of searching one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub count: usize,
    pub snippet: Option<Snippet>,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        self.count > 0
    }
}

/// A compiled content search, built once per traversal.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    patterns: Vec<Regex>,
    max_file_size: Option<u64>,
}

impl ContentMatcher {
    pub fn new(pattern: &str, options: PatternOptions) -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: compile_content_patterns(pattern, options)?,
            max_file_size: None,
        })
    }

    /// Skip files larger than `limit` bytes.
    pub fn with_max_file_size(mut self, limit: Option<u64>) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Search one file. Anything that prevents a clean read counts as no match.
    pub fn evaluate(&self, path: &Path) -> MatchResult {
        if has_excluded_extension(path) {
            log::debug!("skipping {}: excluded extension", path.display());
            return MatchResult::default();
        }

        match fs::metadata(path) {
            Ok(meta) if !meta.is_file() => return MatchResult::default(),
            Ok(meta) => {
                if self.max_file_size.is_some_and(|limit| meta.len() > limit) {
                    log::debug!("skipping {}: {} bytes over size limit", path.display(), meta.len());
                    return MatchResult::default();
                }
            }
            Err(e) => {
                log::debug!("skipping {}: {}", path.display(), e);
                return MatchResult::default();
            }
        }

        if is_binary_file(path) {
            log::debug!("skipping {}: binary content", path.display());
            return MatchResult::default();
        }

        match read_lossy(path) {
            Ok(text) => count_matches(&text, &self.patterns),
            Err(e) => {
                log::debug!("skipping {}: {}", path.display(), e);
                MatchResult::default()
            }
        }
    }
}

/// Compile `pattern` and search a single file with it.
///
/// An invalid pattern yields no matches instead of an error.
pub fn search_file(path: &Path, pattern: &str, is_regex: bool, ignore_case: bool) -> MatchResult {
    let options = PatternOptions {
        is_regex,
        ignore_case,
    };
    match ContentMatcher::new(pattern, options) {
        Ok(matcher) => matcher.evaluate(path),
        Err(e) => {
            log::debug!("invalid search pattern {:?}: {}", pattern, e);
            MatchResult::default()
        }
    }
}

/// Check the extension (case-insensitive) against [`EXCLUDED_EXTENSIONS`].
pub fn has_excluded_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| EXCLUDED_EXTENSIONS.contains(&ext.as_str()))
}

/// A file is binary if its first 1024 bytes contain a null byte.
/// Files that cannot be opened or read are treated as binary.
pub fn is_binary_file(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return true,
    };
    let mut head = Vec::with_capacity(BINARY_PROBE_LEN as usize);
    match file.take(BINARY_PROBE_LEN).read_to_end(&mut head) {
        Ok(_) => head.contains(&0),
        Err(_) => true,
    }
}

/// Read a file as text, dropping any malformed UTF-8 sequences.
fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect())
}

fn count_matches(text: &str, patterns: &[Regex]) -> MatchResult {
    let mut result = MatchResult::default();
    for line in text.lines() {
        for pattern in patterns {
            let mut matches = pattern.find_iter(line);
            let Some(first) = matches.next() else {
                continue;
            };
            result.count += 1 + matches.count();
            if result.snippet.is_none() {
                result.snippet = Some(Snippet::new(first.as_str(), line));
            }
        }
    }
    result
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
