//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `style` - Semantic styles and the color theme
//! - `line` - Styled output lines
//! - `entry` - Formatting one entry with its search annotations
//! - `summary` - The closing counts line
//! - `tree` - Writing a finished listing to a terminal or a string

mod config;
mod entry;
mod line;
mod style;
mod summary;
mod tree;

pub use config::OutputConfig;
pub use entry::{
    Annotation, ERROR_OPENING_DIR, NAME_MATCH_INDICATOR, PERMISSION_DENIED,
    RECURSIVE_NOT_FOLLOWED, format_entry, format_notice,
};
pub use line::{RenderedLine, Segment};
pub use style::{Style, Theme};
pub use summary::{SummaryModes, format_summary, pluralize};
pub use tree::TreeFormatter;
