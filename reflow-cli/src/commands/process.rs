//! Process command implementation

use crate::config::{resolve_config, ConfigOverrides};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_output, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use reflow_core::{Pipeline, ReflowStats};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read inputs line by line instead of loading them whole
    #[arg(long)]
    pub stream: bool,

    /// Page-marker word; repeat to give several (replaces the configured list)
    #[arg(long = "page-word", value_name = "WORD")]
    pub page_words: Vec<String>,

    /// Uppercase letter ratio at which a line is dropped as a header
    #[arg(long, value_name = "RATIO")]
    pub uppercase_threshold: Option<f64>,

    /// Keep end-of-line hyphens instead of joining split words
    #[arg(long)]
    pub no_dehyphenate: bool,

    /// Keep uppercase runs inside kept lines
    #[arg(long)]
    pub no_strip_uppercase: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting paragraph reconstruction");

        let files = resolve_patterns(&self.input)?;
        if let Some(output) = &self.output {
            ensure_output_is_not_input(output, &files)?;
        }
        let config = resolve_config(self.config.as_deref(), &self.overrides())?;
        let pipeline = Pipeline::new(&config).context("Failed to compile pipeline")?;

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(self.format, writer);

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        let mut total = ReflowStats::default();
        for path in &files {
            log::debug!("Processing {}", path.display());

            let stats = if self.stream {
                self.process_streaming(&pipeline, path, formatter.as_mut(), total.paragraphs)?
            } else {
                self.process_whole(&pipeline, path, formatter.as_mut(), total.paragraphs)?
            };

            log::info!(
                "{}: {} lines read, {} discarded, {} paragraphs",
                path.display(),
                stats.lines_read,
                stats.discarded(),
                stats.paragraphs
            );
            progress.file_completed(&path.display().to_string(), stats.paragraphs);
            total.merge(&stats);
        }

        progress.finish();
        formatter.finish(&total)?;

        if files.len() > 1 {
            log::info!(
                "Processed {} files: {} paragraphs",
                files.len(),
                total.paragraphs
            );
        }
        Ok(())
    }

    /// Command-line settings layered over the configuration file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            page_words: self.page_words.clone(),
            uppercase_threshold: self.uppercase_threshold,
            no_dehyphenate: self.no_dehyphenate,
            no_strip_uppercase: self.no_strip_uppercase,
        }
    }

    fn process_whole(
        &self,
        pipeline: &Pipeline,
        path: &Path,
        formatter: &mut dyn OutputFormatter,
        first_index: usize,
    ) -> Result<ReflowStats> {
        let text = FileReader::read_text(path)?;
        let mut paragraphs = pipeline.paragraphs(text.lines());

        for (offset, paragraph) in paragraphs.by_ref().enumerate() {
            formatter.format_paragraph(&paragraph, first_index + offset)?;
        }

        Ok(paragraphs.stats().clone())
    }

    fn process_streaming(
        &self,
        pipeline: &Pipeline,
        path: &Path,
        formatter: &mut dyn OutputFormatter,
        first_index: usize,
    ) -> Result<ReflowStats> {
        let reader = FileReader::open_buffered(path)?;
        let mut paragraphs = pipeline
            .read_paragraphs(reader)
            .with_source_name(path.display().to_string());

        for (offset, paragraph) in paragraphs.by_ref().enumerate() {
            formatter.format_paragraph(&paragraph?, first_index + offset)?;
        }

        Ok(paragraphs.stats().clone())
    }
}

/// Creating the output truncates it, so it must not be one of the inputs
fn ensure_output_is_not_input(output: &Path, files: &[PathBuf]) -> Result<()> {
    // A path that does not exist yet cannot name an input.
    let Ok(output) = output.canonicalize() else {
        return Ok(());
    };

    for file in files {
        let file = file
            .canonicalize()
            .with_context(|| format!("Failed to resolve input path: {}", file.display()))?;
        if file == output {
            return Err(CliError::OutputIsInput(file.display().to_string()).into());
        }
    }
    Ok(())
}
