//! Error types for paragraph reconstruction
//!
//! Line content never produces an error: every line has a defined outcome.
//! Failures come from the boundary (reading input, writing output) or from
//! a configuration rejected before the first line is processed.

use std::io;
use thiserror::Error;

/// Error type for reconstruction operations
#[derive(Debug, Error)]
pub enum ReflowError {
    /// The line source could not be read
    #[error("Input unavailable: {source_name}: {source}")]
    InputUnavailable {
        /// Path or description of the line source
        source_name: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The paragraph sink could not be written
    #[error("Output unwritable: {source}")]
    OutputUnwritable {
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    MalformedConfiguration(String),

    /// A configured regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        /// Compilation failure
        #[source]
        source: regex::Error,
    },
}

impl ReflowError {
    pub(crate) fn input(source_name: impl Into<String>, source: io::Error) -> Self {
        Self::InputUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    pub(crate) fn output(source: io::Error) -> Self {
        Self::OutputUnwritable { source }
    }

    pub(crate) fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

/// Result type for reconstruction operations
pub type Result<T> = std::result::Result<T, ReflowError>;
