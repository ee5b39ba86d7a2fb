//! Errors that stop canopy before a traversal starts.
//!
//! Everything that can go wrong *during* a walk is absorbed by the walker and
//! shown inline, so this enum only covers the boundary: a bad root path, a
//! pattern that does not compile, or a failed write to the terminal.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
