//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use reflow_core::{Paragraph, ParagraphWriter, ReflowStats};
use std::io::Write;

/// Text formatter - paragraphs separated by exactly one blank line
pub struct TextFormatter<W: Write> {
    writer: ParagraphWriter<W>,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer: ParagraphWriter::new(writer),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph, _index: usize) -> Result<()> {
        self.writer.write_paragraph(paragraph)?;
        Ok(())
    }

    fn finish(&mut self, _stats: &ReflowStats) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
