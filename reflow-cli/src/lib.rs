//! Reflow CLI library
//!
//! This library provides the command-line interface for rebuilding
//! paragraphs from PDF-extracted text.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use commands::{Cli, Commands};
pub use error::{CliError, CliResult};
