//! Output formatting module

use anyhow::{Context, Result};
use reflow_core::{Paragraph, ReflowStats};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single paragraph
    fn format_paragraph(&mut self, paragraph: &Paragraph, index: usize) -> Result<()>;

    /// Finalize output once every input is processed
    fn finish(&mut self, stats: &ReflowStats) -> Result<()>;
}

pub mod json;
pub mod lines;
pub mod text;

pub use json::JsonFormatter;
pub use lines::LinesFormatter;
pub use text::TextFormatter;

/// Boxed output destination
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Paragraphs separated by one blank line
    Text,
    /// One paragraph per line, no separators
    Lines,
    /// JSON document with paragraphs and statistics
    Json,
}

/// Build the formatter for a format
pub fn create_formatter(format: OutputFormat, writer: OutputWriter) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Lines => Box::new(LinesFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}

/// Open the output destination: a file when given, stdout otherwise
pub fn open_output(path: Option<&Path>) -> Result<OutputWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
