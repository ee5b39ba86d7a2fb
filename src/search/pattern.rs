//! Pattern compilation shared by name and content search

use regex::{Regex, RegexBuilder};

/// How a user-supplied pattern is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
    /// Use the pattern as a regular expression instead of a literal.
    pub is_regex: bool,
    pub ignore_case: bool,
}

/// Compile a single pattern, escaping it first unless regex mode is on.
pub fn compile(pattern: &str, options: PatternOptions) -> Result<Regex, regex::Error> {
    let source = if options.is_regex {
        pattern.to_string()
    } else {
        regex::escape(pattern)
    };
    RegexBuilder::new(&source)
        .case_insensitive(options.ignore_case)
        .build()
}

/// Split a literal search pattern into its comma-separated keywords.
///
/// Keywords are trimmed and empty ones are dropped, so `"foo, ,bar"` yields
/// `["foo", "bar"]`.
pub fn split_keywords(pattern: &str) -> Vec<&str> {
    pattern
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// Compile a content search pattern.
///
/// Regex mode yields exactly one expression. Literal mode yields one escaped
/// expression per keyword, which lets `"TODO,FIXME"` look for either word.
pub fn compile_content_patterns(
    pattern: &str,
    options: PatternOptions,
) -> Result<Vec<Regex>, regex::Error> {
    if options.is_regex {
        return Ok(vec![compile(pattern, options)?]);
    }
    split_keywords(pattern)
        .into_iter()
        .map(|keyword| compile(keyword, options))
        .collect()
}

/// Matches entry names anywhere within the name (unanchored).
#[derive(Debug, Clone)]
pub struct NameMatcher {
    regex: Regex,
}

impl NameMatcher {
    pub fn new(pattern: &str, options: PatternOptions) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: compile(pattern, options)?,
        })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}
