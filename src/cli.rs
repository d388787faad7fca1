//! Command-line interface for htmldown.
//!
//! Two positional file paths, nothing else to configure. Argument
//! errors surface as the usage error so the process exits with
//! status 1, not clap's default.

use clap::Parser;
use htmldown_core::{HtmldownError, Result};
use std::path::PathBuf;

/// Htmldown - a line-oriented Markdown to HTML converter.
///
/// Converts a constrained markdown subset (headings, flat lists,
/// paragraphs, a handful of inline spans) into HTML fragments,
/// one per line.
#[derive(Parser, Debug)]
#[command(
    name = "htmldown",
    version,
    about = "A line-oriented Markdown to HTML converter",
    after_help = "Examples:\n  \
                  htmldown README.md README.html\n  \
                  htmldown -l debug notes.md notes.html"
)]
pub struct Cli {
    /// Markdown file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// HTML file to write (created or overwritten)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse process arguments, mapping any clap error to the usage error.
    pub fn from_args() -> Result<Self> {
        Self::try_parse().map_err(|_| HtmldownError::Usage)
    }
}
