//! Repair of words broken by end-of-line hyphenation

use std::borrow::Cow;

/// Single-slot buffer for a word start broken at a line boundary
///
/// At most one fragment is pending at a time. It is consumed by the next
/// line fed that does not itself end in a hyphen, or dropped by
/// [`Dehyphenator::take_pending`] at end of input.
#[derive(Debug, Default, Clone)]
pub struct Dehyphenator {
    pending: Option<String>,
}

impl Dehyphenator {
    /// Create an empty dehyphenator
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one physical line
    ///
    /// Returns `None` while a hyphenated word is still incomplete. Otherwise
    /// returns the line, prefixed with any pending fragment (no separator).
    pub fn feed<'a>(&mut self, line: &'a str) -> Option<Cow<'a, str>> {
        let trimmed = line.trim_end();

        if let Some(fragment) = trimmed.strip_suffix('-') {
            self.pending
                .get_or_insert_with(String::new)
                .push_str(fragment);
            return None;
        }

        match self.pending.take() {
            Some(mut merged) => {
                merged.push_str(line.trim_start());
                Some(Cow::Owned(merged))
            }
            None => Some(Cow::Borrowed(line)),
        }
    }

    /// Whether a fragment is waiting for its continuation
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending fragment, if any
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Remove and return the pending fragment
    ///
    /// Used at end of input, where the fragment is dropped rather than
    /// emitted as a truncated word.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }
}
