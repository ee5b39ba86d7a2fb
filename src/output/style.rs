//! Semantic styles and the theme that colors them

use termcolor::{Color, ColorSpec};

/// What a piece of output means, independent of how it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Directory,
    /// Entry whose name matched the name pattern
    NameMatch,
    /// File whose content matched the search pattern
    ContentMatch,
    /// `[match]` and `[N matches]` markers
    Indicator,
    Snippet,
    /// Non-matching entries during a search, and inline notices
    Dimmed,
    /// Name match total in the summary line
    NameTally,
    /// Content match total in the summary line
    ContentTally,
}

/// Maps each [`Style`] to terminal colors. Stateless; built once and shared.
#[derive(Debug, Clone)]
pub struct Theme {
    directory: ColorSpec,
    name_match: ColorSpec,
    content_match: ColorSpec,
    indicator: ColorSpec,
    snippet: ColorSpec,
    dimmed: ColorSpec,
    name_tally: ColorSpec,
    content_tally: ColorSpec,
}

impl Theme {
    pub fn spec(&self, style: Style) -> &ColorSpec {
        match style {
            Style::Directory => &self.directory,
            Style::NameMatch => &self.name_match,
            Style::ContentMatch => &self.content_match,
            Style::Indicator => &self.indicator,
            Style::Snippet => &self.snippet,
            Style::Dimmed => &self.dimmed,
            Style::NameTally => &self.name_tally,
            Style::ContentTally => &self.content_tally,
        }
    }
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

fn bold(color: Color) -> ColorSpec {
    let mut spec = fg(color);
    spec.set_bold(true);
    spec
}

impl Default for Theme {
    fn default() -> Self {
        let mut dimmed = ColorSpec::new();
        dimmed.set_dimmed(true);
        Self {
            directory: bold(Color::Blue),
            name_match: bold(Color::Green),
            content_match: bold(Color::Magenta),
            indicator: fg(Color::Yellow),
            snippet: fg(Color::Cyan),
            dimmed,
            name_tally: fg(Color::Green),
            content_tally: fg(Color::Magenta),
        }
    }
}
