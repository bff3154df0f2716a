//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use reflow_core::{Pipeline, ReflowConfig};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match ReflowConfig::from_file(&self.config).and_then(|config| {
            Pipeline::new(&config)?;
            Ok(config)
        }) {
            Ok(config) => {
                let classifier = &config.classifier;
                println!("✓ Configuration is valid!");
                println!(
                    "  Page-marker words: {}",
                    classifier.page_marker_words.join(", ")
                );
                println!(
                    "  Uppercase threshold: {}",
                    classifier.uppercase_threshold
                );
                println!(
                    "  Dehyphenation: {}",
                    if config.dehyphenation.enabled { "on" } else { "off" }
                );
                println!(
                    "  Terminators: {}",
                    config.sentence.terminators.iter().collect::<String>()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::from(e).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    #[test]
    fn test_validate_valid_config() {
        let file = config_file(
            r#"
[classifier]
page_marker_words = ["Pagina"]
uppercase_threshold = 0.95

[sentence]
terminators = [".", "!"]
"#,
        );

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_out_of_range_threshold() {
        let file = config_file("[classifier]\nmostly_upper_threshold = 2.0\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_bad_toc_pattern() {
        let file = config_file("[classifier]\ntoc_pattern = \"(unclosed\"\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Invalid pattern"));
    }

    #[test]
    fn test_validate_not_toml() {
        let file = config_file("this is = = not toml");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }
}
