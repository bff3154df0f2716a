//! Paragraph reconstruction for text extracted from PDF documents
//!
//! PDF text extraction yields physical lines: page headers and footers,
//! isolated page numbers, table-of-contents rows, uppercase running headers,
//! words split by end-of-line hyphens, and paragraphs broken across many
//! lines. This crate rebuilds a clean stream of logical paragraphs from such
//! lines in a single pass.
//!
//! # Architecture
//!
//! - **Domain layer** ([`domain`]): the line classifier, the uppercase-run
//!   stripper, the dehyphenator and the paragraph assembler
//! - **Pipeline** ([`pipeline`]): orchestration, one line in and zero or one
//!   paragraph out per step, with lazy iterators over lines and readers
//! - **Boundary** ([`sink`], [`config`], [`error`]): rendering, TOML
//!   configuration and errors
//!
//! [`citation`] and [`tidy`] are standalone text passes that are typically
//! run before or after reconstruction.
//!
//! # Example
//!
//! ```rust
//! use reflow_core::{Pipeline, ReflowConfig};
//!
//! let pipeline = Pipeline::new(&ReflowConfig::default()).unwrap();
//!
//! let text = "--- Page 1 ---\nThe recon-\nstructed text\nflows again.\n7\nNext one.";
//! let paragraphs = pipeline.process_text(text);
//!
//! assert_eq!(paragraphs, vec!["The reconstructed text flows again.", "Next one."]);
//! ```

pub mod citation;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod sink;
pub mod stats;
pub mod tidy;

pub use config::{ReflowConfig, ReflowConfigBuilder};
pub use domain::{DiscardReason, Paragraph, Verdict};
pub use error::{ReflowError, Result};
pub use pipeline::{Paragraphs, Pipeline, ReadParagraphs, Reconstructor};
pub use sink::{render_paragraphs, ParagraphWriter};
pub use stats::ReflowStats;
pub use tidy::{tidy_text, TidyOptions};
