//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod citations;
pub mod generate_config;
pub mod process;
pub mod tidy;
pub mod validate;

/// Rebuild logical paragraphs from PDF-extracted text
#[derive(Debug, Parser)]
#[command(name = "reflow", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Dispatch to the selected command
    pub fn run(&self) -> Result<()> {
        log::debug!("Arguments: {self:?}");
        match &self.command {
            Commands::Process(args) => args.execute(self.quiet),
            Commands::Citations(args) => args.execute(),
            Commands::Tidy(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconstruct paragraphs from extracted text files
    Process(process::ProcessArgs),

    /// Rewrite chat citation markers to bracketed indices
    Citations(citations::CitationsArgs),

    /// Clean up translated text
    Tidy(tidy::TidyArgs),

    /// Write the default configuration as TOML
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a TOML configuration file
    Validate(validate::ValidateArgs),
}
