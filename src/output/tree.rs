//! Tree formatter for buffered output
//!
//! This module provides `TreeFormatter` which writes a finished `TreeListing`
//! (root line, entry lines, blank line, summary) as plain text or with colors.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};

use crate::tree::TreeListing;

use super::config::OutputConfig;
use super::line::RenderedLine;
use super::style::Style;
use super::summary::{SummaryModes, format_summary};

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
    modes: SummaryModes,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig, modes: SummaryModes) -> Self {
        Self { config, modes }
    }

    /// Render the whole listing without colors.
    pub fn format(&self, root: &Path, listing: &TreeListing) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write(&mut out, root, listing)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Print to stdout, colored if enabled.
    pub fn print(&self, root: &Path, listing: &TreeListing) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(&mut stdout, root, listing)?;
        stdout.flush()
    }

    pub fn write<W: WriteColor>(
        &self,
        out: &mut W,
        root: &Path,
        listing: &TreeListing,
    ) -> io::Result<()> {
        let theme = &self.config.theme;

        let mut root_line = RenderedLine::new();
        root_line.push_styled(root.display().to_string(), Style::Directory);
        root_line.write_to(out, theme)?;
        writeln!(out)?;

        for line in &listing.lines {
            line.write_to(out, theme)?;
            writeln!(out)?;
        }

        writeln!(out)?;
        format_summary(&listing.stats, self.modes).write_to(out, theme)?;
        writeln!(out)?;
        Ok(())
    }
}
