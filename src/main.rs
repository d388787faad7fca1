//! Htmldown - a line-oriented Markdown to HTML converter.
//!
//! This binary reads a markdown file, converts it line by line, and
//! writes the resulting HTML fragments to the output file.

mod cli;

use cli::Cli;
use htmldown_core::{HtmldownError, Result};
use htmldown_parser::classify;
use htmldown_render::Renderer;
use log::{debug, info, LevelFilter};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    let cli = match Cli::from_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    setup_logging(&cli.log_level);
    info!("Htmldown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    if !cli.input.is_file() {
        return Err(HtmldownError::MissingInput(cli.input.clone()));
    }

    info!("Converting {}", cli.input.display());
    let markdown = std::fs::read_to_string(&cli.input)?;
    debug!("Read {} bytes", markdown.len());

    let writer = BufWriter::new(File::create(&cli.output)?);
    let mut renderer = Renderer::new(writer);
    for line in markdown.lines() {
        renderer.render_event(classify(line))?;
    }
    renderer.finish()?.flush()?;

    info!("Wrote {}", cli.output.display());
    Ok(())
}
