//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use reflow_core::{Paragraph, ReflowStats};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects paragraphs and writes one document at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    paragraphs: Vec<ParagraphData>,
}

/// Data structure for one paragraph in JSON output
#[derive(Debug, Serialize)]
pub struct ParagraphData {
    /// Position across all processed inputs
    pub index: usize,
    /// The paragraph text
    pub text: String,
    /// Length in characters
    pub length: usize,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    paragraphs: &'a [ParagraphData],
    stats: &'a ReflowStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            paragraphs: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph, index: usize) -> Result<()> {
        self.paragraphs.push(ParagraphData {
            index,
            text: paragraph.to_string(),
            length: paragraph.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self, stats: &ReflowStats) -> Result<()> {
        let document = JsonDocument {
            paragraphs: &self.paragraphs,
            stats,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
