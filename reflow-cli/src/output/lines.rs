//! One-paragraph-per-line output formatter

use super::OutputFormatter;
use anyhow::Result;
use reflow_core::{Paragraph, ReflowStats};
use std::io::Write;

/// Lines formatter - one paragraph per line, no blank separators
pub struct LinesFormatter<W: Write> {
    writer: W,
}

impl<W: Write> LinesFormatter<W> {
    /// Create a new lines formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for LinesFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph, _index: usize) -> Result<()> {
        writeln!(self.writer, "{paragraph}")?;
        Ok(())
    }

    fn finish(&mut self, _stats: &ReflowStats) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
