//! Paragraph sink
//!
//! Renders paragraphs with exactly one blank line between neighbours and a
//! trailing newline after each one.

use crate::error::{ReflowError, Result};
use std::io::Write;

/// Writes paragraphs to any [`Write`] implementation
#[derive(Debug)]
pub struct ParagraphWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> ParagraphWriter<W> {
    /// Create a new paragraph writer
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write one paragraph
    pub fn write_paragraph(&mut self, paragraph: &str) -> Result<()> {
        if self.written > 0 {
            self.writer.write_all(b"\n").map_err(ReflowError::output)?;
        }
        self.writer
            .write_all(paragraph.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(ReflowError::output)?;
        self.written += 1;
        Ok(())
    }

    /// Write every paragraph of a sequence
    pub fn write_all<I, P>(&mut self, paragraphs: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        for paragraph in paragraphs {
            self.write_paragraph(paragraph.as_ref())?;
        }
        Ok(())
    }

    /// Number of paragraphs written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(ReflowError::output)
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

/// Render paragraphs to a string
pub fn render_paragraphs<I, P>(paragraphs: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let mut out = String::new();
    for (index, paragraph) in paragraphs.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(paragraph.as_ref());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_blank_line_between_paragraphs() {
        assert_eq!(render_paragraphs(["One.", "Two."]), "One.\n\nTwo.\n");
        assert_eq!(render_paragraphs(["Only."]), "Only.\n");
        assert_eq!(render_paragraphs(Vec::<String>::new()), "");
    }

    #[test]
    fn test_writer_matches_render() {
        let mut writer = ParagraphWriter::new(Vec::new());
        writer.write_all(["One.", "Two.", "Three."]).unwrap();
        assert_eq!(writer.written(), 3);

        let bytes = writer.finish().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            render_paragraphs(["One.", "Two.", "Three."])
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_output_unwritable() {
        let mut writer = ParagraphWriter::new(BrokenPipe);
        let result = writer.write_paragraph("Lost.");
        assert!(matches!(result, Err(ReflowError::OutputUnwritable { .. })));
        assert_eq!(writer.written(), 0);
    }
}
