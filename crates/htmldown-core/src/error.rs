//! Error types for htmldown

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for htmldown operations
#[derive(Error, Debug)]
pub enum HtmldownError {
    /// Wrong command-line argument shape
    #[error("Usage: htmldown <input.md> <output.html>")]
    Usage,

    /// Input path does not exist or is not a regular file
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for htmldown operations
pub type Result<T> = std::result::Result<T, HtmldownError>;
