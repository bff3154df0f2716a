//! Reconstruction configuration
//!
//! The configuration is a plain serde structure so it can be written to and
//! read from TOML. Every section is optional in the file; missing values fall
//! back to [`defaults`]. Validation happens once, before any line is seen.

use crate::error::{ReflowError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Localized words for "page" recognized in page header/footer markers
    pub const PAGE_MARKER_WORDS: &[&str] = &["Page", "Página", "Pagina", "Seite"];

    /// Decoration surrounding the page marker (repeated, optional per side)
    pub const PAGE_MARKER_SEPARATOR: &str = "-";

    /// Numeric outline label followed by a title
    pub const TOC_PATTERN: &str = r"^\d+(?:[.\s]\d+)*\s+.*";

    /// Uppercase ratio at or above which a whole line is discarded
    pub const UPPERCASE_THRESHOLD: f64 = 1.0;

    /// Ratio used by the secondary "mostly uppercase" predicate
    pub const MOSTLY_UPPER_THRESHOLD: f64 = 0.8;

    /// Sentence-terminal characters
    pub const TERMINATORS: &[char] = &['.', '!', '?', '…'];

    /// Characters allowed after a terminator
    pub const CLOSING: &[char] = &['"', '\'', '»', '”', ')'];
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReflowConfig {
    /// Noise-line classification
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Hyphenated word repair
    #[serde(default)]
    pub dehyphenation: DehyphenationConfig,

    /// Inline uppercase-run removal
    #[serde(default)]
    pub stripper: StripperConfig,

    /// Paragraph boundary punctuation
    #[serde(default)]
    pub sentence: SentenceConfig,
}

/// Classification-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Words for "page" in page markers; empty disables the rule
    pub page_marker_words: Vec<String>,

    /// Decoration around page markers, e.g. `-` for `--- Page 3 ---`
    pub page_marker_separator: String,

    /// Discard lines made only of digits
    pub drop_page_numbers: bool,

    /// Discard table-of-contents rows
    pub drop_toc_lines: bool,

    /// Pattern recognizing table-of-contents rows
    pub toc_pattern: String,

    /// Discard lines whose letters are uppercase at or above the threshold
    pub drop_uppercase_lines: bool,

    /// Uppercase ratio threshold for discarding a line
    pub uppercase_threshold: f64,

    /// Threshold of the secondary "mostly uppercase" predicate
    pub mostly_upper_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            page_marker_words: defaults::PAGE_MARKER_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
            page_marker_separator: defaults::PAGE_MARKER_SEPARATOR.to_string(),
            drop_page_numbers: true,
            drop_toc_lines: true,
            toc_pattern: defaults::TOC_PATTERN.to_string(),
            drop_uppercase_lines: true,
            uppercase_threshold: defaults::UPPERCASE_THRESHOLD,
            mostly_upper_threshold: defaults::MOSTLY_UPPER_THRESHOLD,
        }
    }
}

/// Dehyphenation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DehyphenationConfig {
    /// Join words broken by a trailing hyphen
    pub enabled: bool,
}

impl Default for DehyphenationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Uppercase-run stripper configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripperConfig {
    /// Remove embedded runs of fully uppercase words
    pub enabled: bool,
}

impl Default for StripperConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Sentence-terminal punctuation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceConfig {
    /// Characters that end a sentence
    pub terminators: Vec<char>,

    /// Closing quotes or brackets allowed after a terminator
    pub closing: Vec<char>,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            terminators: defaults::TERMINATORS.to_vec(),
            closing: defaults::CLOSING.to_vec(),
        }
    }
}

impl ReflowConfig {
    /// Create a configuration builder
    pub fn builder() -> ReflowConfigBuilder {
        ReflowConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ReflowConfig = toml::from_str(content).map_err(|e| {
            ReflowError::MalformedConfiguration(format!("Failed to parse TOML: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReflowError::MalformedConfiguration(format!(
                "Failed to read configuration '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ReflowConfig = toml::from_str(&content).map_err(|e| {
            ReflowError::MalformedConfiguration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ReflowError::MalformedConfiguration(format!("Failed to serialize TOML: {e}"))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let classifier = &self.classifier;

        check_ratio("uppercase_threshold", classifier.uppercase_threshold)?;
        check_ratio("mostly_upper_threshold", classifier.mostly_upper_threshold)?;

        if !classifier.page_marker_words.is_empty() {
            if classifier.page_marker_separator.is_empty() {
                return Err(ReflowError::MalformedConfiguration(
                    "page_marker_separator must not be empty".into(),
                ));
            }
            if classifier
                .page_marker_words
                .iter()
                .any(|word| word.trim().is_empty())
            {
                return Err(ReflowError::MalformedConfiguration(
                    "page_marker_words must not contain empty words".into(),
                ));
            }
        }

        if classifier.drop_toc_lines {
            Regex::new(&classifier.toc_pattern)
                .map_err(|e| ReflowError::pattern(classifier.toc_pattern.as_str(), e))?;
        }

        if self.sentence.terminators.is_empty() {
            return Err(ReflowError::MalformedConfiguration(
                "No sentence terminators defined".into(),
            ));
        }

        Ok(())
    }
}

fn check_ratio(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ReflowError::MalformedConfiguration(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ReflowConfigBuilder {
    config: ReflowConfig,
}

impl ReflowConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the page-marker words
    pub fn page_marker_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.classifier.page_marker_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page-marker decoration
    pub fn page_marker_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.classifier.page_marker_separator = separator.into();
        self
    }

    /// Set the table-of-contents pattern
    pub fn toc_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.classifier.toc_pattern = pattern.into();
        self
    }

    /// Toggle the table-of-contents rule
    pub fn drop_toc_lines(mut self, enabled: bool) -> Self {
        self.config.classifier.drop_toc_lines = enabled;
        self
    }

    /// Toggle the isolated page-number rule
    pub fn drop_page_numbers(mut self, enabled: bool) -> Self {
        self.config.classifier.drop_page_numbers = enabled;
        self
    }

    /// Toggle the fully-uppercase line rule
    pub fn drop_uppercase_lines(mut self, enabled: bool) -> Self {
        self.config.classifier.drop_uppercase_lines = enabled;
        self
    }

    /// Set the fully-uppercase threshold
    pub fn uppercase_threshold(mut self, threshold: f64) -> Self {
        self.config.classifier.uppercase_threshold = threshold;
        self
    }

    /// Set the mostly-uppercase threshold
    pub fn mostly_upper_threshold(mut self, threshold: f64) -> Self {
        self.config.classifier.mostly_upper_threshold = threshold;
        self
    }

    /// Toggle dehyphenation
    pub fn dehyphenate(mut self, enabled: bool) -> Self {
        self.config.dehyphenation.enabled = enabled;
        self
    }

    /// Toggle uppercase-run stripping
    pub fn strip_uppercase_runs(mut self, enabled: bool) -> Self {
        self.config.stripper.enabled = enabled;
        self
    }

    /// Replace the sentence terminators
    pub fn terminators(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.config.sentence.terminators = chars.into_iter().collect();
        self
    }

    /// Replace the closing characters allowed after a terminator
    pub fn closing(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.config.sentence.closing = chars.into_iter().collect();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ReflowConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
