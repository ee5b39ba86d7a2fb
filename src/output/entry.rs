//! Formatting a single tree entry

use crate::search::MatchResult;

use super::line::RenderedLine;
use super::style::Style;

pub const PERMISSION_DENIED: &str = "[permission denied]";
pub const ERROR_OPENING_DIR: &str = "[error opening dir]";
pub const RECURSIVE_NOT_FOLLOWED: &str = "[recursive, not followed]";
pub const NAME_MATCH_INDICATOR: &str = "[match]";

/// Search results for one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub name_matched: bool,
    pub content: MatchResult,
}

impl Annotation {
    pub fn is_match(&self) -> bool {
        self.name_matched || self.content.is_match()
    }
}

/// Format an entry name with its search annotations.
///
/// A name match takes precedence over the directory style, and when both
/// the name and the content matched only the snippet is shown, since the
/// highlighted name already says the file is relevant.
pub fn format_entry(
    name: &str,
    is_dir: bool,
    annotation: &Annotation,
    search_active: bool,
) -> RenderedLine {
    let suffix = if is_dir { "/" } else { "" };
    let content = &annotation.content;
    let mut line = RenderedLine::new();

    if annotation.name_matched {
        line.push_styled(format!("{}{}", name, suffix), Style::NameMatch);
        if content.is_match() {
            push_snippet(&mut line, content);
        } else {
            line.push(" ")
                .push_styled(NAME_MATCH_INDICATOR, Style::Indicator);
        }
    } else if is_dir {
        line.push_styled(format!("{}/", name), Style::Directory);
    } else if content.is_match() {
        line.push_styled(name, Style::ContentMatch)
            .push(" ")
            .push_styled(format!("[{}]", match_count_text(content.count)), Style::Indicator);
        push_snippet(&mut line, content);
    } else if search_active {
        line.push_styled(name, Style::Dimmed);
    } else {
        line.push(name);
    }
    line
}

/// An inline notice (e.g. `[permission denied]`) under the current prefix.
pub fn format_notice(prefix: &str, notice: &str) -> RenderedLine {
    let mut line = RenderedLine::new();
    line.push(prefix).push_styled(notice, Style::Dimmed);
    line
}

fn push_snippet(line: &mut RenderedLine, content: &MatchResult) {
    if let Some(snippet) = &content.snippet {
        line.push(" ").push_styled(snippet.to_string(), Style::Snippet);
    }
}

fn match_count_text(count: usize) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{} matches", count)
    }
}
