//! Output configuration types

use super::style::Theme;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub theme: Theme,
}

impl OutputConfig {
    pub fn with_color(use_color: bool) -> Self {
        Self {
            use_color,
            ..Default::default()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            theme: Theme::default(),
        }
    }
}
