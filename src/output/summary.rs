//! The closing summary line

use crate::tree::{Stats, WalkerConfig};

use super::line::RenderedLine;
use super::style::Style;

/// Which match tallies the summary should include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryModes {
    pub name_search: bool,
    pub content_search: bool,
}

impl From<&WalkerConfig> for SummaryModes {
    fn from(config: &WalkerConfig) -> Self {
        Self {
            name_search: config.name_search().is_some(),
            content_search: config.content_search().is_some(),
        }
    }
}

/// `"1 file"`, `"0 files"`, `"2 files"`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// e.g. `3 directories, 1 file, 2 name matches, 1 content match`
pub fn format_summary(stats: &Stats, modes: SummaryModes) -> RenderedLine {
    let mut line = RenderedLine::new();
    line.push(format!(
        "{}, {}",
        pluralize(stats.dirs, "directory", "directories"),
        pluralize(stats.files, "file", "files")
    ));

    if modes.name_search {
        line.push(", ").push_styled(
            pluralize(stats.name_matches, "name match", "name matches"),
            Style::NameTally,
        );
    }
    if modes.content_search {
        line.push(", ").push_styled(
            pluralize(stats.content_matches, "content match", "content matches"),
            Style::ContentTally,
        );
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "file", "files"), "0 files");
        assert_eq!(pluralize(1, "file", "files"), "1 file");
        assert_eq!(pluralize(2, "directory", "directories"), "2 directories");
    }

    #[test]
    fn test_summary_without_search() {
        let stats = Stats {
            dirs: 1,
            files: 3,
            name_matches: 0,
            content_matches: 0,
        };
        let line = format_summary(&stats, SummaryModes::default());
        assert_eq!(line.text(), "1 directory, 3 files");
    }

    #[test]
    fn test_summary_with_content_search() {
        let stats = Stats {
            dirs: 0,
            files: 2,
            name_matches: 0,
            content_matches: 1,
        };
        let modes = SummaryModes {
            name_search: false,
            content_search: true,
        };
        assert_eq!(
            format_summary(&stats, modes).text(),
            "0 directories, 2 files, 1 content match"
        );
    }

    #[test]
    fn test_summary_with_both_searches() {
        let stats = Stats {
            dirs: 2,
            files: 1,
            name_matches: 1,
            content_matches: 0,
        };
        let modes = SummaryModes {
            name_search: true,
            content_search: true,
        };
        assert_eq!(
            format_summary(&stats, modes).text(),
            "2 directories, 1 file, 1 name match, 0 content matches"
        );
    }

    #[test]
    fn test_modes_from_config() {
        let config = WalkerConfig {
            name_pattern: Some("x".to_string()),
            search_pattern: Some(String::new()),
            ..Default::default()
        };
        let modes = SummaryModes::from(&config);
        assert!(modes.name_search);
        assert!(!modes.content_search);
    }
}
