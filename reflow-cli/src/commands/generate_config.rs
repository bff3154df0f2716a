//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use reflow_core::ReflowConfig;
use std::path::PathBuf;

const HEADER: &str = "\
# reflow configuration
#
# [classifier]    rules for dropping page markers, page numbers, table-of-contents
#                 rows and uppercase running headers
# [dehyphenation] joining of words split by an end-of-line hyphen
# [stripper]      removal of uppercase runs inside kept lines
# [sentence]      characters that end a paragraph-closing sentence

";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.display().to_string()).into());
        }

        let template = generate_template()?;
        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to match your documents");
        println!("2. Validate it:");
        println!("   reflow validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   reflow process -i input.txt -c {}", self.output.display());

        Ok(())
    }
}

/// Default configuration rendered as commented TOML
pub fn generate_template() -> Result<String> {
    let body = ReflowConfig::default()
        .to_toml_string()
        .context("Failed to render default configuration")?;
    Ok(format!("{HEADER}{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_template_round_trips() {
        let template = generate_template().unwrap();
        assert!(template.starts_with("# reflow configuration"));
        assert!(template.contains("[classifier]"));
        assert!(template.contains("[sentence]"));

        let parsed = ReflowConfig::from_toml_str(&template).unwrap();
        assert_eq!(parsed, ReflowConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("reflow.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };

        assert!(args.execute().is_ok());
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("page_marker_words"));
    }

    #[test]
    fn test_existing_file_needs_force() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("reflow.toml");
        fs::write(&output_path, "# mine\n").unwrap();

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::OutputExists(_))
        ));
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "# mine\n");

        let forced = GenerateConfigArgs {
            output: output_path.clone(),
            force: true,
        };
        forced.execute().unwrap();
        assert!(fs::read_to_string(&output_path)
            .unwrap()
            .contains("[classifier]"));
    }
}
