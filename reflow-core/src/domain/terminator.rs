//! Sentence-terminal punctuation test
//!
//! This predicate alone decides paragraph boundaries: a pending paragraph
//! whose text ends a sentence is flushed before the next line starts.

use crate::config::SentenceConfig;
use std::collections::HashSet;

/// Character set with an ASCII fast path
#[derive(Debug, Clone)]
struct CharClass {
    /// Non-ASCII members
    chars: HashSet<char>,
    /// ASCII lookup table
    ascii_lookup: [bool; 128],
}

impl CharClass {
    fn new(chars: &[char]) -> Self {
        let mut ascii_lookup = [false; 128];
        let mut others = HashSet::new();

        for &ch in chars {
            if ch.is_ascii() {
                ascii_lookup[ch as usize] = true;
            } else {
                others.insert(ch);
            }
        }

        Self {
            chars: others,
            ascii_lookup,
        }
    }

    #[inline]
    fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_lookup[ch as usize]
        } else {
            self.chars.contains(&ch)
        }
    }
}

/// Decides whether text ends a sentence
///
/// True when the text, ignoring trailing whitespace, ends with a terminator
/// optionally followed by exactly one closing character.
#[derive(Debug, Clone)]
pub struct SentenceTerminals {
    terminators: CharClass,
    closing: CharClass,
}

impl Default for SentenceTerminals {
    fn default() -> Self {
        Self::from_config(&SentenceConfig::default())
    }
}

impl SentenceTerminals {
    /// Create from explicit character sets
    pub fn new(terminators: &[char], closing: &[char]) -> Self {
        Self {
            terminators: CharClass::new(terminators),
            closing: CharClass::new(closing),
        }
    }

    /// Create from configuration
    pub fn from_config(config: &SentenceConfig) -> Self {
        Self::new(&config.terminators, &config.closing)
    }

    /// Check if a character ends a sentence
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(ch)
    }

    /// Check if a character may follow a terminator
    #[inline]
    pub fn is_closing(&self, ch: char) -> bool {
        self.closing.contains(ch)
    }

    /// Evaluate the test on the end of `text`
    pub fn ends_sentence(&self, text: &str) -> bool {
        let mut tail = text.trim_end().chars().rev();

        match tail.next() {
            Some(last) if self.is_terminator(last) => true,
            Some(last) if self.is_closing(last) => {
                tail.next().is_some_and(|ch| self.is_terminator(ch))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_terminators() {
        let terminals = SentenceTerminals::default();
        for text in ["Done.", "Really!", "Why?", "And then…", "Wait...  "] {
            assert!(terminals.ends_sentence(text), "{text:?}");
        }
    }

    #[test]
    fn test_closing_characters() {
        let terminals = SentenceTerminals::default();
        for text in [
            "He said \"stop.\"",
            "It's 'fine!'",
            "«Ciao.»",
            "“Yes?”",
            "(See above.)",
            "(See above.)   ",
        ] {
            assert!(terminals.ends_sentence(text), "{text:?}");
        }
    }

    #[test]
    fn test_not_terminal() {
        let terminals = SentenceTerminals::default();
        for text in [
            "",
            "   ",
            "Hello there",
            "a list:",
            "a clause,",
            "(aside)",
            "quoted\"",
            "two closers.\")",
        ] {
            assert!(!terminals.ends_sentence(text), "{text:?}");
        }
    }

    #[test]
    fn test_custom_sets() {
        let terminals = SentenceTerminals::new(&['。'], &['」']);
        assert!(terminals.ends_sentence("これはテストです。"));
        assert!(terminals.ends_sentence("「はい。」"));
        assert!(!terminals.ends_sentence("Done."));
    }

    #[test]
    fn test_ascii_and_unicode_lookup() {
        let terminals = SentenceTerminals::default();
        assert!(terminals.is_terminator('.'));
        assert!(terminals.is_terminator('…'));
        assert!(!terminals.is_terminator(','));
        assert!(terminals.is_closing('»'));
        assert!(terminals.is_closing(')'));
        assert!(!terminals.is_closing(']'));
    }
}
