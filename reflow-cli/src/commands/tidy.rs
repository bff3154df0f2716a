//! Tidy command implementation

use crate::input::FileReader;
use crate::output::open_output;
use anyhow::{Context, Result};
use clap::Args;
use reflow_core::{tidy_text, TidyOptions};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the tidy command
#[derive(Debug, Args)]
pub struct TidyArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Drop lines matching this case-insensitive regex; repeatable
    #[arg(long = "drop-pattern", value_name = "REGEX")]
    pub drop_patterns: Vec<String>,

    /// Leave immediately repeated words alone
    #[arg(long)]
    pub keep_repeats: bool,
}

impl TidyArgs {
    /// Execute the tidy command
    pub fn execute(&self) -> Result<()> {
        let text = FileReader::read_text(&self.input)?;
        let tidied = tidy_text(&text, &self.options())?;

        let mut writer = open_output(self.output.as_deref())?;
        writer
            .write_all(tidied.as_bytes())
            .and_then(|_| writer.flush())
            .context("Failed to write tidied text")?;

        log::info!(
            "{}: {} -> {} bytes",
            self.input.display(),
            text.len(),
            tidied.len()
        );
        Ok(())
    }

    /// Tidy passes selected by the flags
    pub fn options(&self) -> TidyOptions {
        TidyOptions {
            drop_line_patterns: self.drop_patterns.clone(),
            collapse_repeated_words: !self.keep_repeats,
            ..TidyOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(args: &TidyArgs) -> String {
        args.execute().unwrap();
        fs::read_to_string(args.output.as_ref().unwrap()).unwrap()
    }

    #[test]
    fn test_tidy_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("tradotto.txt");
        fs::write(&input, "Oh mio Dio!\nciao ciao , mondo.Poi  \n\n\n\nfine\n").unwrap();

        let args = TidyArgs {
            input,
            output: Some(dir.path().join("out.txt")),
            drop_patterns: vec!["^oh mio dio".into()],
            keep_repeats: false,
        };

        assert_eq!(run(&args), "ciao, mondo. Poi\n\nfine\n");
    }

    #[test]
    fn test_keep_repeats() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "molto molto bene\n").unwrap();

        let args = TidyArgs {
            input,
            output: Some(dir.path().join("out.txt")),
            drop_patterns: Vec::new(),
            keep_repeats: true,
        };

        assert_eq!(run(&args), "molto molto bene\n");
    }

    #[test]
    fn test_invalid_pattern_fails() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "text\n").unwrap();

        let args = TidyArgs {
            input,
            output: Some(dir.path().join("out.txt")),
            drop_patterns: vec!["(".into()],
            keep_repeats: false,
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Invalid pattern"));
    }
}
