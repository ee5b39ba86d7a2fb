//! Rendered output lines
//!
//! A `RenderedLine` is a sequence of text segments, each optionally tagged
//! with a [`Style`]. The walker builds them; colors are only applied when a
//! line is written through a [`Theme`].

use std::io;

use termcolor::WriteColor;

use super::style::{Style, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Option<Style>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLine {
    segments: Vec<Segment>,
}

impl RenderedLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unstyled text.
    pub fn push(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_segment(text.into(), None)
    }

    pub fn push_styled(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.push_segment(text.into(), Some(style))
    }

    /// Append all segments of another line.
    pub fn append(&mut self, other: RenderedLine) -> &mut Self {
        self.segments.extend(other.segments);
        self
    }

    fn push_segment(&mut self, text: String, style: Option<Style>) -> &mut Self {
        if !text.is_empty() {
            self.segments.push(Segment { text, style });
        }
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The line without any styling.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Write the line (without a trailing newline), coloring styled segments.
    pub fn write_to<W: WriteColor>(&self, out: &mut W, theme: &Theme) -> io::Result<()> {
        for segment in &self.segments {
            match segment.style {
                Some(style) => {
                    out.set_color(theme.spec(style))?;
                    write!(out, "{}", segment.text)?;
                    out.reset()?;
                }
                None => write!(out, "{}", segment.text)?,
            }
        }
        Ok(())
    }
}
