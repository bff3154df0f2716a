//! Reassembly of physical lines into logical paragraphs

use super::terminator::SentenceTerminals;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// A finished logical paragraph: one line of text, no embedded line breaks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Paragraph(String);

impl Paragraph {
    /// Paragraph text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Paragraph {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Paragraph {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Paragraph {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Paragraph {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Paragraph {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

impl From<Paragraph> for String {
    fn from(paragraph: Paragraph) -> Self {
        paragraph.0
    }
}

/// Input to the assembler for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerInput<'a> {
    /// A kept, cleaned, non-blank line
    Line(&'a str),
    /// A genuine blank line from the source
    Blank,
}

/// Single-slot paragraph accumulator
///
/// States are Empty (`pending` is `None`) and Accumulating. The pending
/// text is never empty while accumulating.
#[derive(Debug, Clone, Default)]
pub struct ParagraphAssembler {
    terminals: SentenceTerminals,
    pending: Option<String>,
}

impl ParagraphAssembler {
    /// Create an assembler using the given terminal test
    pub fn new(terminals: SentenceTerminals) -> Self {
        Self {
            terminals,
            pending: None,
        }
    }

    /// Feed one step; returns a paragraph when one is completed
    pub fn feed(&mut self, input: AssemblerInput<'_>) -> Option<Paragraph> {
        match input {
            AssemblerInput::Blank => self.flush(),
            AssemblerInput::Line(line) => self.push_line(line),
        }
    }

    fn push_line(&mut self, line: &str) -> Option<Paragraph> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match self.pending.as_mut() {
            None => {
                self.pending = Some(line.to_string());
                None
            }
            Some(pending) if self.terminals.ends_sentence(pending) => {
                let finished = std::mem::replace(pending, line.to_string());
                Some(Paragraph(finished))
            }
            Some(pending) => {
                pending.push(' ');
                pending.push_str(line);
                None
            }
        }
    }

    /// Emit the pending paragraph, if any, and return to Empty
    ///
    /// Must be called once after the last line so the final paragraph is
    /// not lost. Calling it again yields nothing.
    pub fn flush(&mut self) -> Option<Paragraph> {
        self.pending.take().map(Paragraph)
    }

    /// Whether a paragraph is being accumulated
    pub fn is_accumulating(&self) -> bool {
        self.pending.is_some()
    }

    /// The paragraph in progress
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}
