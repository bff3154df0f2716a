//! Removal of uppercase word runs embedded in body text

/// A whitespace-separated token with at least two letters, all uppercase
///
/// Non-letter characters in the token are ignored, so `(NASA)` counts
/// while `NASA's` does not.
fn is_uppercase_word(token: &str) -> bool {
    let mut letters = 0usize;
    for ch in token.chars().filter(|ch| ch.is_alphabetic()) {
        if !ch.is_uppercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2
}

/// Strips running headers that bleed into body lines
#[derive(Debug, Clone, Copy)]
pub struct UppercaseRunStripper {
    enabled: bool,
}

impl Default for UppercaseRunStripper {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl UppercaseRunStripper {
    /// Create a stripper; a disabled stripper only trims
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Remove every maximal uppercase run and trim the result
    ///
    /// When something was removed, remaining whitespace is collapsed to
    /// single spaces so the removal leaves no gap. An empty result means the
    /// whole line was consumed.
    pub fn strip(&self, line: &str) -> String {
        if !self.enabled || !line.split_whitespace().any(is_uppercase_word) {
            return line.trim().to_string();
        }

        line.split_whitespace()
            .filter(|token| !is_uppercase_word(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
