//! Reconstruction statistics

use crate::domain::DiscardReason;
use serde::Serialize;

/// Counters collected while reconstructing one input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReflowStats {
    /// Physical lines read
    pub lines_read: usize,
    /// Genuine blank lines
    pub blank_lines: usize,
    /// Lines discarded as page markers
    pub page_markers: usize,
    /// Lines discarded as isolated page numbers
    pub page_numbers: usize,
    /// Lines discarded as table-of-contents rows
    pub toc_lines: usize,
    /// Lines discarded as fully uppercase
    pub uppercase_lines: usize,
    /// Hyphenated line breaks repaired
    pub hyphen_joins: usize,
    /// Kept lines emptied by the uppercase-run stripper
    pub emptied_lines: usize,
    /// Kept lines that still pass the "mostly uppercase" predicate
    pub mostly_upper_kept: usize,
    /// Hyphen fragments dropped at end of input
    pub dropped_fragments: usize,
    /// Text of the most recently dropped fragment, without its hyphen
    pub dropped_fragment: Option<String>,
    /// Paragraphs emitted
    pub paragraphs: usize,
}

impl ReflowStats {
    /// Total lines discarded by the classifier
    pub fn discarded(&self) -> usize {
        self.page_markers + self.page_numbers + self.toc_lines + self.uppercase_lines
    }

    pub(crate) fn record_discard(&mut self, reason: DiscardReason) {
        match reason {
            DiscardReason::PageMarker => self.page_markers += 1,
            DiscardReason::PageNumber => self.page_numbers += 1,
            DiscardReason::TocLine => self.toc_lines += 1,
            DiscardReason::UppercaseLine => self.uppercase_lines += 1,
        }
    }

    /// Add another input's counters to this one
    pub fn merge(&mut self, other: &ReflowStats) {
        self.lines_read += other.lines_read;
        self.blank_lines += other.blank_lines;
        self.page_markers += other.page_markers;
        self.page_numbers += other.page_numbers;
        self.toc_lines += other.toc_lines;
        self.uppercase_lines += other.uppercase_lines;
        self.hyphen_joins += other.hyphen_joins;
        self.emptied_lines += other.emptied_lines;
        self.mostly_upper_kept += other.mostly_upper_kept;
        self.dropped_fragments += other.dropped_fragments;
        self.paragraphs += other.paragraphs;
        if other.dropped_fragment.is_some() {
            self.dropped_fragment.clone_from(&other.dropped_fragment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_totals() {
        let mut stats = ReflowStats::default();
        stats.record_discard(DiscardReason::PageMarker);
        stats.record_discard(DiscardReason::TocLine);
        stats.record_discard(DiscardReason::TocLine);

        assert_eq!(stats.page_markers, 1);
        assert_eq!(stats.toc_lines, 2);
        assert_eq!(stats.discarded(), 3);
    }

    #[test]
    fn test_merge() {
        let mut total = ReflowStats {
            lines_read: 10,
            paragraphs: 2,
            ..Default::default()
        };
        let other = ReflowStats {
            lines_read: 5,
            page_numbers: 1,
            paragraphs: 1,
            ..Default::default()
        };

        total.merge(&other);
        assert_eq!(total.lines_read, 15);
        assert_eq!(total.paragraphs, 3);
        assert_eq!(total.discarded(), 1);
        assert_eq!(total.dropped_fragment, None);
    }

    #[test]
    fn test_merge_keeps_latest_dropped_fragment() {
        let mut total = ReflowStats {
            dropped_fragments: 1,
            dropped_fragment: Some("first".into()),
            ..Default::default()
        };
        total.merge(&ReflowStats {
            dropped_fragments: 1,
            dropped_fragment: Some("second".into()),
            ..Default::default()
        });
        total.merge(&ReflowStats::default());

        assert_eq!(total.dropped_fragments, 2);
        assert_eq!(total.dropped_fragment.as_deref(), Some("second"));
    }
}
