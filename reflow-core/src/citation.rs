//! Citation-marker rewriting
//!
//! Chat-exported text carries markers such as
//! `:contentReference[oaicite:3]{index=3}`. They are rewritten to `[3]`.
//! This is a standalone substitution; the reconstruction pipeline never
//! calls it.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

const CITATION_MARKER: &str = r":contentReference\[oaicite:\d+\]\{index=(\d+)\}";

fn citation_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(\()?{CITATION_MARKER}(\))?");
        Regex::new(&pattern).expect("citation marker pattern is valid")
    })
}

/// Replace every citation marker with its bracketed index
///
/// A parenthesis directly around the marker is kept on its side, so
/// `(:contentReference[oaicite:1]{index=2})` becomes `([2])`.
pub fn rewrite_citations(text: &str) -> Cow<'_, str> {
    citation_marker().replace_all(text, |caps: &Captures<'_>| {
        let open = if caps.get(1).is_some() { "(" } else { "" };
        let close = if caps.get(3).is_some() { ")" } else { "" };
        format!("{open}[{}]{close}", &caps[2])
    })
}

/// Number of citation markers in the text
pub fn count_citations(text: &str) -> usize {
    citation_marker().find_iter(text).count()
}
