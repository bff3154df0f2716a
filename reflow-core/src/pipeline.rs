//! Line-by-line reconstruction pipeline
//!
//! Each physical line goes through classification, dehyphenation,
//! uppercase-run stripping and paragraph assembly before the next line is
//! looked at. One line in yields zero or one paragraph out; the final
//! paragraph is flushed once the line source is exhausted.

use crate::config::ReflowConfig;
use crate::domain::{
    is_mostly_upper, AssemblerInput, Dehyphenator, LineClassifier, Paragraph, ParagraphAssembler,
    SentenceTerminals, UppercaseRunStripper, Verdict,
};
use crate::error::{ReflowError, Result};
use crate::stats::ReflowStats;
use std::borrow::Cow;
use std::io::{BufRead, Lines};
use std::iter::FusedIterator;

/// Compiled, immutable pipeline configuration
///
/// A `Pipeline` holds no per-input state; every call to
/// [`Pipeline::reconstructor`] or one of the iterator constructors starts a
/// fresh reconstruction, so one pipeline can process many inputs.
#[derive(Debug, Clone)]
pub struct Pipeline {
    classifier: LineClassifier,
    stripper: UppercaseRunStripper,
    terminals: SentenceTerminals,
    dehyphenate: bool,
    mostly_upper_threshold: f64,
}

impl Pipeline {
    /// Validate the configuration and compile the pipeline
    pub fn new(config: &ReflowConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            classifier: LineClassifier::new(&config.classifier)?,
            stripper: UppercaseRunStripper::new(config.stripper.enabled),
            terminals: SentenceTerminals::from_config(&config.sentence),
            dehyphenate: config.dehyphenation.enabled,
            mostly_upper_threshold: config.classifier.mostly_upper_threshold,
        })
    }

    /// The line classifier in use
    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Start a push-based reconstruction
    pub fn reconstructor(&self) -> Reconstructor<'_> {
        Reconstructor {
            pipeline: self,
            dehyphenator: Dehyphenator::new(),
            assembler: ParagraphAssembler::new(self.terminals.clone()),
            stats: ReflowStats::default(),
        }
    }

    /// Lazily reconstruct paragraphs from an in-memory line source
    pub fn paragraphs<I>(&self, lines: I) -> Paragraphs<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Paragraphs {
            lines: lines.into_iter(),
            reconstructor: self.reconstructor(),
            exhausted: false,
        }
    }

    /// Lazily reconstruct paragraphs from a reader
    pub fn read_paragraphs<R: BufRead>(&self, reader: R) -> ReadParagraphs<'_, R> {
        ReadParagraphs {
            lines: reader.lines(),
            reconstructor: self.reconstructor(),
            source_name: "input stream".to_string(),
            exhausted: false,
        }
    }

    /// Reconstruct a whole text eagerly
    pub fn process_text(&self, text: &str) -> Vec<Paragraph> {
        self.paragraphs(text.lines()).collect()
    }
}

/// Push-based reconstruction state for one input
///
/// Owns the pending hyphen fragment and the pending paragraph. Call
/// [`Reconstructor::finish`] after the last line.
#[derive(Debug)]
pub struct Reconstructor<'p> {
    pipeline: &'p Pipeline,
    dehyphenator: Dehyphenator,
    assembler: ParagraphAssembler,
    stats: ReflowStats,
}

impl Reconstructor<'_> {
    /// Process one physical line (terminator already removed)
    pub fn push_line(&mut self, raw: &str) -> Option<Paragraph> {
        self.stats.lines_read += 1;

        if raw.trim().is_empty() {
            self.stats.blank_lines += 1;
            let flushed = self.assembler.feed(AssemblerInput::Blank);
            return self.emit(flushed);
        }

        if let Verdict::Discard(reason) = self.pipeline.classifier.classify(raw) {
            log::debug!("Discarding {reason}: {:?}", raw.trim());
            self.stats.record_discard(reason);
            return None;
        }

        if is_mostly_upper(raw, self.pipeline.mostly_upper_threshold) {
            log::trace!("Keeping mostly uppercase line: {:?}", raw.trim());
            self.stats.mostly_upper_kept += 1;
        }

        let merged = if self.pipeline.dehyphenate {
            if self.dehyphenator.has_pending() {
                self.stats.hyphen_joins += 1;
            }
            match self.dehyphenator.feed(raw) {
                Some(merged) => merged,
                None => {
                    log::debug!(
                        "Buffering hyphenated fragment: {:?}",
                        self.dehyphenator.pending().unwrap_or_default()
                    );
                    return None;
                }
            }
        } else {
            Cow::Borrowed(raw)
        };

        let cleaned = self.pipeline.stripper.strip(&merged);
        if cleaned.is_empty() {
            log::debug!("Line emptied by uppercase stripping: {:?}", merged.trim());
            self.stats.emptied_lines += 1;
            return None;
        }

        let finished = self.assembler.feed(AssemblerInput::Line(&cleaned));
        self.emit(finished)
    }

    /// Signal end of input
    ///
    /// Drops any dangling hyphen fragment and flushes the pending paragraph.
    /// Further calls return `None`.
    pub fn finish(&mut self) -> Option<Paragraph> {
        if let Some(fragment) = self.dehyphenator.take_pending() {
            log::debug!("Dropping hyphen fragment at end of input: {fragment:?}");
            self.stats.dropped_fragments += 1;
            self.stats.dropped_fragment = Some(fragment);
        }

        let flushed = self.assembler.flush();
        self.emit(flushed)
    }

    /// Counters so far
    pub fn stats(&self) -> &ReflowStats {
        &self.stats
    }

    fn emit(&mut self, paragraph: Option<Paragraph>) -> Option<Paragraph> {
        if paragraph.is_some() {
            self.stats.paragraphs += 1;
        }
        paragraph
    }
}

/// Lazy paragraph sequence over an in-memory line source
///
/// One-shot: once the source is exhausted and the final paragraph flushed,
/// the iterator keeps returning `None`. Dropping it early is safe.
#[derive(Debug)]
pub struct Paragraphs<'p, I> {
    lines: I,
    reconstructor: Reconstructor<'p>,
    exhausted: bool,
}

impl<I> Paragraphs<'_, I> {
    /// Counters so far; complete once the iterator is exhausted
    pub fn stats(&self) -> &ReflowStats {
        self.reconstructor.stats()
    }
}

impl<I> Iterator for Paragraphs<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Paragraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        for line in self.lines.by_ref() {
            if let Some(paragraph) = self.reconstructor.push_line(line.as_ref()) {
                return Some(paragraph);
            }
        }

        self.exhausted = true;
        self.reconstructor.finish()
    }
}

impl<I> FusedIterator for Paragraphs<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

/// Lazy paragraph sequence over a reader
///
/// Yields `Err(InputUnavailable)` once if reading fails, then stops.
#[derive(Debug)]
pub struct ReadParagraphs<'p, R> {
    lines: Lines<R>,
    reconstructor: Reconstructor<'p>,
    source_name: String,
    exhausted: bool,
}

impl<R> ReadParagraphs<'_, R> {
    /// Name reported in read errors
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// Counters so far; complete once the iterator is exhausted
    pub fn stats(&self) -> &ReflowStats {
        self.reconstructor.stats()
    }
}

impl<R: BufRead> Iterator for ReadParagraphs<'_, R> {
    type Item = Result<Paragraph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    if let Some(paragraph) = self.reconstructor.push_line(&line) {
                        return Some(Ok(paragraph));
                    }
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(ReflowError::input(self.source_name.clone(), e)));
                }
            }
        }

        self.exhausted = true;
        self.reconstructor.finish().map(Ok)
    }
}

impl<R: BufRead> FusedIterator for ReadParagraphs<'_, R> {}
