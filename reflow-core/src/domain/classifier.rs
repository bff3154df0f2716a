//! Structural-noise line classification
//!
//! Rules are evaluated in a fixed order and the first match wins:
//! page marker, isolated page number, table-of-contents row, fully
//! uppercase line. A line can satisfy several rules (`--- 12 ---` style
//! markers are also digit-heavy), so the order decides the reported reason.

use crate::config::ClassifierConfig;
use crate::error::{ReflowError, Result};
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Why a line was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscardReason {
    /// Page header/footer such as `--- Page 12 ---`
    PageMarker,
    /// A line holding nothing but a page number
    PageNumber,
    /// Table-of-contents row such as `1.2  Scope`
    TocLine,
    /// Running header printed in uppercase
    UppercaseLine,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::PageMarker => write!(f, "page marker"),
            DiscardReason::PageNumber => write!(f, "page number"),
            DiscardReason::TocLine => write!(f, "table-of-contents line"),
            DiscardReason::UppercaseLine => write!(f, "uppercase line"),
        }
    }
}

/// Classification outcome for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The line carries content
    Keep,
    /// The line is structural noise
    Discard(DiscardReason),
}

impl Verdict {
    /// Whether the line should be dropped
    pub fn is_discard(&self) -> bool {
        matches!(self, Verdict::Discard(_))
    }
}

/// Pure line classifier built from [`ClassifierConfig`]
#[derive(Debug, Clone)]
pub struct LineClassifier {
    page_marker: Option<Regex>,
    drop_page_numbers: bool,
    toc_line: Option<Regex>,
    uppercase_threshold: Option<f64>,
}

impl LineClassifier {
    /// Compile the classifier rules
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let page_marker = if config.page_marker_words.is_empty() {
            None
        } else {
            let pattern = page_marker_pattern(
                &config.page_marker_words,
                &config.page_marker_separator,
            );
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ReflowError::pattern(pattern.as_str(), e))?;
            Some(regex)
        };

        let toc_line = if config.drop_toc_lines {
            let regex = Regex::new(&config.toc_pattern)
                .map_err(|e| ReflowError::pattern(config.toc_pattern.as_str(), e))?;
            Some(regex)
        } else {
            None
        };

        Ok(Self {
            page_marker,
            drop_page_numbers: config.drop_page_numbers,
            toc_line,
            uppercase_threshold: config
                .drop_uppercase_lines
                .then_some(config.uppercase_threshold),
        })
    }

    /// Classify a line; surrounding whitespace is ignored
    pub fn classify(&self, line: &str) -> Verdict {
        let line = line.trim();

        if let Some(marker) = &self.page_marker {
            if marker.is_match(line) {
                return Verdict::Discard(DiscardReason::PageMarker);
            }
        }

        if self.drop_page_numbers && is_page_number(line) {
            return Verdict::Discard(DiscardReason::PageNumber);
        }

        if let Some(toc) = &self.toc_line {
            if toc.is_match(line) {
                return Verdict::Discard(DiscardReason::TocLine);
            }
        }

        if let Some(threshold) = self.uppercase_threshold {
            if is_mostly_upper(line, threshold) {
                return Verdict::Discard(DiscardReason::UppercaseLine);
            }
        }

        Verdict::Keep
    }
}

/// `--- Page 12 ---`, `Página 3`, `-- pagina 7` ...
fn page_marker_pattern(words: &[String], separator: &str) -> String {
    let words = words
        .iter()
        .map(|word| regex::escape(word.trim()))
        .collect::<Vec<_>>()
        .join("|");
    let sep = regex::escape(separator);

    format!(r"^(?:(?:{sep})+\s*)?(?:{words})\s*\d+\s*(?:{sep})*$")
}

fn is_page_number(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|ch| ch.is_ascii_digit())
}

/// Share of alphabetic characters that are uppercase
///
/// Returns `None` when the line has no letters at all.
pub fn uppercase_ratio(line: &str) -> Option<f64> {
    let (letters, upper) = line
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .fold((0usize, 0usize), |(letters, upper), ch| {
            (letters + 1, upper + usize::from(ch.is_uppercase()))
        });

    if letters == 0 {
        None
    } else {
        Some(upper as f64 / letters as f64)
    }
}

/// True when the uppercase ratio of the line reaches `threshold`
///
/// Lines without letters are never considered uppercase.
pub fn is_mostly_upper(line: &str, threshold: f64) -> bool {
    uppercase_ratio(line).is_some_and(|ratio| ratio >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LineClassifier {
        LineClassifier::new(&ClassifierConfig::default()).unwrap()
    }

    #[test]
    fn test_page_markers_discarded() {
        let classifier = classifier();
        for line in [
            "--- Página 12 ---",
            "  ---Page 3---  ",
            "PAGE 7",
            "pagina 41",
            "- Seite 2 -",
        ] {
            assert_eq!(
                classifier.classify(line),
                Verdict::Discard(DiscardReason::PageMarker),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_page_marker_requires_number_at_end() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("Page 3 shows the results."),
            Verdict::Keep
        );
        assert!(!classifier.classify("--- Page ---").is_discard());
    }

    #[test]
    fn test_custom_page_marker_word_and_separator() {
        let config = ClassifierConfig {
            page_marker_words: vec!["Folio".into()],
            page_marker_separator: "=".into(),
            ..Default::default()
        };
        let classifier = LineClassifier::new(&config).unwrap();

        assert_eq!(
            classifier.classify("== folio 9 =="),
            Verdict::Discard(DiscardReason::PageMarker)
        );
        assert_eq!(classifier.classify("Page 9 is here."), Verdict::Keep);
    }

    #[test]
    fn test_isolated_page_numbers() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("  42 "),
            Verdict::Discard(DiscardReason::PageNumber)
        );
        assert_eq!(classifier.classify(""), Verdict::Keep);
    }

    #[test]
    fn test_toc_lines() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("1.2.3  Chapter title ... 45"),
            Verdict::Discard(DiscardReason::TocLine)
        );
        assert_eq!(
            classifier.classify("2 Background"),
            Verdict::Discard(DiscardReason::TocLine)
        );
        assert_eq!(classifier.classify("1.2"), Verdict::Keep);
        assert_eq!(classifier.classify("Section 1.2 covers this."), Verdict::Keep);
    }

    #[test]
    fn test_uppercase_boundary_at_full_threshold() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("THE RUNNING HEADER"),
            Verdict::Discard(DiscardReason::UppercaseLine)
        );
        assert_eq!(classifier.classify("THE RUNNING HEADEr"), Verdict::Keep);
        assert_eq!(classifier.classify("Ordinary prose."), Verdict::Keep);
    }

    #[test]
    fn test_rule_order_page_marker_first() {
        let classifier = classifier();
        // Also fully uppercase, but the page-marker rule wins.
        assert_eq!(
            classifier.classify("--- PAGE 4 ---"),
            Verdict::Discard(DiscardReason::PageMarker)
        );
    }

    #[test]
    fn test_rules_can_be_disabled() {
        let config = ClassifierConfig {
            page_marker_words: Vec::new(),
            drop_page_numbers: false,
            drop_toc_lines: false,
            drop_uppercase_lines: false,
            ..Default::default()
        };
        let classifier = LineClassifier::new(&config).unwrap();

        for line in ["--- Page 1 ---", "12", "1.1 Intro", "HEADER"] {
            assert_eq!(classifier.classify(line), Verdict::Keep, "{line:?}");
        }
    }

    #[test]
    fn test_uppercase_ratio() {
        assert_eq!(uppercase_ratio("1234 --"), None);
        assert_eq!(uppercase_ratio("ABCD"), Some(1.0));
        assert_eq!(uppercase_ratio("AbCd"), Some(0.5));
        assert_eq!(uppercase_ratio("ÉTÉ été"), Some(0.5));
    }

    #[test]
    fn test_mostly_upper_is_less_strict() {
        let line = "CHAPTER ONe";
        assert!(is_mostly_upper(line, 0.8));
        assert!(!is_mostly_upper(line, 1.0));
        assert!(!is_mostly_upper("42", 0.0));
    }
}
