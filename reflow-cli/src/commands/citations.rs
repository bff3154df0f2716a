//! Citations command implementation

use crate::input::FileReader;
use crate::output::open_output;
use anyhow::{Context, Result};
use clap::Args;
use reflow_core::citation::{count_citations, rewrite_citations};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the citations command
#[derive(Debug, Args)]
pub struct CitationsArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Rewrite the input file itself
    #[arg(long)]
    pub in_place: bool,
}

impl CitationsArgs {
    /// Execute the citations command
    pub fn execute(&self) -> Result<()> {
        let text = FileReader::read_text(&self.input)?;
        let markers = count_citations(&text);
        let rewritten = rewrite_citations(&text);

        let destination = if self.in_place {
            Some(self.input.as_path())
        } else {
            self.output.as_deref()
        };

        let mut writer = open_output(destination)?;
        writer
            .write_all(rewritten.as_bytes())
            .and_then(|_| writer.flush())
            .context("Failed to write rewritten text")?;

        log::info!(
            "{}: rewrote {markers} citation marker(s)",
            self.input.display()
        );
        Ok(())
    }
}
