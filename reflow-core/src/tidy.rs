//! Post-translation text tidy-up
//!
//! Machine-translated text picks up a few recurring defects: stuttered
//! words, stray spaces before punctuation, missing spaces after it, trailing
//! blanks, and long runs of empty lines. These passes fix them on whole
//! text, independently of paragraph reconstruction.

use crate::error::{ReflowError, Result};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Options for [`tidy_text`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TidyOptions {
    /// Lines matching any of these (case-insensitive) patterns are removed
    pub drop_line_patterns: Vec<String>,

    /// Collapse immediately repeated words (`ciao ciao` → `ciao`)
    pub collapse_repeated_words: bool,

    /// Remove spaces before punctuation and add missing ones after it
    pub fix_punctuation_spacing: bool,

    /// Strip trailing spaces and tabs from every line
    pub trim_trailing_whitespace: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: usize,
}

impl Default for TidyOptions {
    fn default() -> Self {
        Self {
            drop_line_patterns: Vec::new(),
            collapse_repeated_words: true,
            fix_punctuation_spacing: true,
            trim_trailing_whitespace: true,
            max_consecutive_newlines: 2,
        }
    }
}

fn word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

fn space_before_punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[^\S\n]+([,.;:?!])").expect("punctuation spacing pattern is valid")
    })
}

fn trailing_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)[ \t]+$").expect("trailing whitespace pattern is valid"))
}

/// Apply the enabled passes in order
pub fn tidy_text(text: &str, options: &TidyOptions) -> Result<String> {
    let drop_patterns = options
        .drop_line_patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ReflowError::pattern(pattern.as_str(), e))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut text = if drop_patterns.is_empty() {
        text.to_string()
    } else {
        drop_lines(text, &drop_patterns)
    };

    if options.collapse_repeated_words {
        text = collapse_repeated_words(&text);
    }

    if options.fix_punctuation_spacing {
        text = space_before_punctuation()
            .replace_all(&text, "$1")
            .into_owned();
        text = ensure_space_after_punctuation(&text);
    }

    if options.trim_trailing_whitespace {
        text = trailing_whitespace().replace_all(&text, "").into_owned();
    }

    if options.max_consecutive_newlines > 0 {
        text = limit_newlines(&text, options.max_consecutive_newlines);
    }

    Ok(text)
}

fn drop_lines(text: &str, patterns: &[Regex]) -> String {
    text.split_inclusive('\n')
        .filter(|line| {
            let dropped = patterns.iter().any(|re| re.is_match(line));
            if dropped {
                log::debug!("Dropping line: {:?}", line.trim_end());
            }
            !dropped
        })
        .collect()
}

/// Remove words that repeat the previous word across whitespace only
fn collapse_repeated_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0;
    let mut previous: Option<&str> = None;
    let mut previous_end = 0;

    for found in word().find_iter(text) {
        let gap = &text[previous_end..found.start()];
        let repeated = previous == Some(found.as_str())
            && !gap.is_empty()
            && gap.chars().all(char::is_whitespace);

        if repeated {
            out.push_str(&text[copied_to..previous_end]);
            copied_to = found.end();
        } else {
            previous = Some(found.as_str());
        }
        previous_end = found.end();
    }

    out.push_str(&text[copied_to..]);
    out
}

/// `word,next` → `word, next`; `end.Next` → `end. Next`
///
/// A period only gets a space between a lowercase and an uppercase letter,
/// which leaves decimals, initials and dotted abbreviations alone.
fn ensure_space_after_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 32);
    let mut chars = text.chars().peekable();
    let mut previous: Option<char> = None;

    while let Some(ch) = chars.next() {
        out.push(ch);

        if let Some(&next) = chars.peek() {
            let needs_space = match ch {
                ',' | ';' | ':' | '?' | '!' => next.is_alphabetic(),
                '.' => next.is_uppercase() && previous.is_some_and(char::is_lowercase),
                _ => false,
            };
            if needs_space {
                out.push(' ');
            }
        }

        previous = Some(ch);
    }

    out
}

fn limit_newlines(text: &str, max: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0;

    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            if run > max {
                continue;
            }
        } else {
            run = 0;
        }
        out.push(ch);
    }

    out
}
